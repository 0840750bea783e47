use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown parameter kind: {0}")]
    UnknownParameterKind(String),
    #[error("unknown gender target: {0} (expected male, female or both)")]
    UnknownGender(String),
    #[error("unknown audience preset: {0} (expected kids, adults or seniors)")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
