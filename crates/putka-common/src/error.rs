//! Error types for the Putka results crates.

use thiserror::Error;

/// Errors raised while decoding persisted values or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PutkaError {
    /// A persisted run status id has no matching variant
    #[error("Unknown run status id: {0}")]
    UnknownRunStatus(i32),

    /// A persisted upload status id has no matching variant
    #[error("Unknown upload status id: {0}")]
    UnknownUploadStatus(i32),

    /// A persisted language id has no matching variant
    #[error("Unknown language id: {0}")]
    UnknownLanguage(i32),

    /// A status code string could not be parsed
    #[error("Unknown status code: {0}")]
    UnknownStatusCode(String),

    /// A personality name could not be parsed
    #[error("Unknown personality: {0}")]
    UnknownPersonality(String),
}

impl PutkaError {
    /// Returns the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PutkaError::UnknownRunStatus(_) => "UNKNOWN_RUN_STATUS",
            PutkaError::UnknownUploadStatus(_) => "UNKNOWN_UPLOAD_STATUS",
            PutkaError::UnknownLanguage(_) => "UNKNOWN_LANGUAGE",
            PutkaError::UnknownStatusCode(_) => "UNKNOWN_STATUS_CODE",
            PutkaError::UnknownPersonality(_) => "UNKNOWN_PERSONALITY",
        }
    }
}

/// Result type alias using PutkaError
pub type PutkaResult<T> = Result<T, PutkaError>;
