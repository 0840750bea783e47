//! End-to-end analysis of a loaded table.
//!
//! The pipeline runs the three stages in order against one table:
//!
//! 1. **Detect** - bind headers to parameter kinds
//! 2. **Aggregate** - frequency tables and age statistics
//! 3. **Score** - match every record against the target
//!
//! Nothing is carried over between runs, so analyzing the same table with the
//! same target twice yields identical results.

use serde::Serialize;
use tracing::info_span;

use audit_map::{DetectionResult, ParameterDetector};
use audit_model::{
    AgeSummary, MatchResult, ParameterDescriptor, ParameterDistribution, Table, TargetSpec,
};

use crate::aggregate::aggregate;
use crate::scorer::score_matches;

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Where the table came from (file path), if known.
    pub source: Option<String>,
    pub columns: Vec<String>,
    pub total_records: usize,
    pub target: TargetSpec,
    pub detection: DetectionResult,
    pub descriptors: Vec<ParameterDescriptor>,
    pub distributions: Vec<ParameterDistribution>,
    pub age_summary: Option<AgeSummary>,
    pub match_result: MatchResult,
}

/// Runs detection, aggregation and scoring over `table`.
pub fn analyze_table(
    table: &Table,
    detector: &ParameterDetector,
    target: &TargetSpec,
) -> Analysis {
    let span = info_span!("analyze", records = table.len(), columns = table.columns().len());
    let _guard = span.enter();

    let detection = detector.detect(table.columns());
    let descriptors = detection.descriptors();
    let aggregation = aggregate(table, &descriptors);
    let match_result = score_matches(table, &descriptors, target);

    Analysis {
        source: None,
        columns: table.columns().to_vec(),
        total_records: table.len(),
        target: *target,
        detection,
        descriptors,
        distributions: aggregation.distributions,
        age_summary: aggregation.age_summary,
        match_result,
    }
}
