//! Sensitive parameter detection for audience tables.
//!
//! Column names are matched against an ordered rule table (see
//! [`patterns`]) to decide which columns carry age, gender, location and the
//! other demographic attributes; everything else is treated as a generic
//! parameter.

#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod patterns;
pub mod types;

pub use engine::{ParameterDetector, detect_parameters};
pub use error::DetectionError;
pub use patterns::{Rule, RuleTable, builtin_patterns};
pub use types::{Binding, DetectionResult};
