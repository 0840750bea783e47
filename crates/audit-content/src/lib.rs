//! Bias, personal data and harmful language checks for ad content.
//!
//! The [`ContentClassifier`] trait is the seam; [`KeywordClassifier`] is the
//! shipped deterministic implementation.

#![deny(unsafe_code)]

mod classifier;
mod error;
mod keyword;

pub use classifier::{
    BiasCategory, BiasFindings, ContentClassifier, ContentFindings, ContentInput, MAX_BIAS_SCORE,
    PiiKind, PiiMatch, RiskLevel,
};
pub use error::ClassifierError;
pub use keyword::{HARMFUL_TERMS, KeywordClassifier};
