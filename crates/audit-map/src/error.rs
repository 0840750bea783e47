//! Error types for parameter detection.

use std::fmt;

/// Errors from building a detection rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    /// Extra patterns were configured for a kind that does not exist.
    UnknownKind(String),
    /// A configured pattern is empty after trimming and would match every header.
    EmptyPattern { kind: String },
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(f, "Unknown parameter kind in patterns: {kind}"),
            Self::EmptyPattern { kind } => write!(f, "Empty detection pattern for '{kind}'"),
        }
    }
}

impl std::error::Error for DetectionError {}
