//! Aggregation, target matching and analysis sessions.
//!
//! The functions here are pure over a [`Table`](audit_model::Table): every
//! call rebuilds its output from scratch. [`AnalysisSession`] ties them to a
//! loaded table and the current target.

pub mod age;
pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod session;

pub use age::{age_bucket, age_or_zero, parse_age};
pub use aggregate::{Aggregation, aggregate};
pub use error::{CoreError, Result};
pub use pipeline::{Analysis, analyze_table};
pub use scorer::score_matches;
pub use session::AnalysisSession;
