//! Analysis session.
//!
//! [`AnalysisSession`] holds the state of one interactive audit: the loaded
//! table, the current target and the detector. It replaces shared globals; each
//! caller owns its session and passes it explicitly.

use std::path::Path;

use tracing::{info, warn};

use audit_ingest::{parse_table, read_table};
use audit_map::ParameterDetector;
use audit_model::{DetectionOptions, Table, TargetSpec};

use crate::error::{CoreError, Result};
use crate::pipeline::{Analysis, analyze_table};

/// One audit session over at most one loaded table.
///
/// Loading a table always replaces the previous one. [`analyze`] recomputes
/// everything from the current table and target, so calling it twice without
/// changes returns equal results.
///
/// [`analyze`]: AnalysisSession::analyze
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    table: Option<Table>,
    source: Option<String>,
    target: TargetSpec,
    detector: ParameterDetector,
}

impl AnalysisSession {
    /// Empty session with the default target and built-in detection rules.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetSpec) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_detector(mut self, detector: ParameterDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Replaces the detector with one built from `options`.
    pub fn with_detection_options(self, options: &DetectionOptions) -> Result<Self> {
        let detector = ParameterDetector::from_options(options)?;
        Ok(self.with_detector(detector))
    }

    /// Installs an already parsed table, discarding the previous one.
    pub fn load_table(&mut self, table: Table, source: Option<String>) {
        info!(
            records = table.len(),
            columns = table.columns().len(),
            source = source.as_deref().unwrap_or("<memory>"),
            "loaded table"
        );
        self.table = Some(table);
        self.source = source;
    }

    /// Reads a CSV file into the session.
    ///
    /// The previous table is discarded before reading, so a failed load leaves
    /// the session empty rather than analyzing stale data.
    pub fn load_csv(&mut self, path: &Path) -> Result<&Table> {
        self.clear();
        let table = read_table(path).inspect_err(|error| {
            warn!(path = %path.display(), %error, "failed to load table");
        })?;
        self.load_table(table, Some(path.display().to_string()));
        self.table.as_ref().ok_or(CoreError::NoTable)
    }

    /// Parses CSV text into the session.
    pub fn load_text(&mut self, text: &str) -> Result<&Table> {
        self.clear();
        let table = parse_table(text)?;
        self.load_table(table, None);
        self.table.as_ref().ok_or(CoreError::NoTable)
    }

    pub fn set_target(&mut self, target: TargetSpec) {
        self.target = target;
    }

    pub fn target(&self) -> &TargetSpec {
        &self.target
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn detector(&self) -> &ParameterDetector {
        &self.detector
    }

    /// Drops the loaded table.
    pub fn clear(&mut self) {
        self.table = None;
        self.source = None;
    }

    /// Runs detection, aggregation and scoring over the loaded table.
    pub fn analyze(&self) -> Result<Analysis> {
        let table = self.table.as_ref().ok_or(CoreError::NoTable)?;
        let mut analysis = analyze_table(table, &self.detector, &self.target);
        analysis.source = self.source.clone();
        Ok(analysis)
    }
}
