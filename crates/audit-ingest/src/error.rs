#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub(crate) fn read(origin: impl Into<String>, source: csv::Error) -> Self {
        Self::Read {
            origin: origin.into(),
            source,
        }
    }
}
