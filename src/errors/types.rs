use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KresourError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog file missing: {}: {source}", .path.display())]
    FileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog file {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KresourError {
    pub fn index_out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        KresourError::IndexOutOfRange { kind, index, len }
    }
}
