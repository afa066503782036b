//! Error types for the kifu-notebook crate

use thiserror::Error;

use crate::tree::Path;

/// Main error type for the kifu-notebook crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("kifu record has no root entry")]
    MissingRootEntry,

    #[error("path {path} does not resolve to a node")]
    PathResolution { path: Path },

    #[error("recorded move at tesuu {tesuu} is illegal: {context}")]
    IllegalRecordedMove { tesuu: usize, context: String },

    #[error("move oracle failed: {context}")]
    Oracle { context: String },

    #[error("no save destination has been chosen for this session")]
    NoDestination,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
