use audit_ingest::IngestError;
use audit_map::DetectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no table loaded; load a CSV file before analyzing")]
    NoTable,
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("invalid detection rules: {0}")]
    Detection(#[from] DetectionError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
