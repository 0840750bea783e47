//! Configuration options for an audit run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::target::TargetSpec;

/// Default number of values shown for long categorical distributions.
pub const DEFAULT_TOP_VALUES: usize = 5;
/// Distributions with at most this many values are drawn as pie charts.
pub const DEFAULT_PIE_MAX_VALUES: usize = 6;

/// Options for one audit run, as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditOptions {
    /// Target audience used when the command line does not override it.
    pub target: TargetSpec,
    pub detection: DetectionOptions,
    pub report: ReportOptions,
}

/// Parameter detection options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Extra substring patterns per sensitive kind, keyed by kind name
    /// (e.g. `location = ["province"]`). Appended after the built-in patterns.
    pub extra_patterns: BTreeMap<String, Vec<String>>,
}

impl DetectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_patterns(
        mut self,
        kind: impl Into<String>,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.extra_patterns
            .entry(kind.into())
            .or_default()
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}

/// Report layout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// How many values a bar chart of a long distribution keeps.
    pub top_values: usize,
    /// Largest distribution still drawn as a pie chart.
    pub pie_max_values: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_values: DEFAULT_TOP_VALUES,
            pie_max_values: DEFAULT_PIE_MAX_VALUES,
        }
    }
}
