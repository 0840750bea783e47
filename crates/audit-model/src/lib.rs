//! Data model shared by the audience audit crates.

pub mod distribution;
pub mod error;
pub mod options;
pub mod parameter;
pub mod scoring;
pub mod table;
pub mod target;

pub use distribution::{AgeSummary, FrequencyTable, ParameterDistribution};
pub use error::{ModelError, Result};
pub use options::{
    AuditOptions, DEFAULT_PIE_MAX_VALUES, DEFAULT_TOP_VALUES, DetectionOptions, ReportOptions,
};
pub use parameter::{ParameterDescriptor, ParameterKind, SensitiveKind, find_sensitive};
pub use scoring::{AGE_WEIGHT, GENDER_WEIGHT, MatchResult, ScoreBand, percent, round_half_up};
pub use table::{Record, Table};
pub use target::{AudiencePreset, GenderTarget, TargetSpec};
