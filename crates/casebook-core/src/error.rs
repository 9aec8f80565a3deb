use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Corrupt article data in {}: {message}", .path.display())]
    CorruptData { path: PathBuf, message: String },

    #[error("Malformed submission: {field} must be a non-negative integer, got {value:?}")]
    MalformedSubmission { field: String, value: String },

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CaseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CaseError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CaseError>;
