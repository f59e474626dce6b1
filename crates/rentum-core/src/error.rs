//! Error types for the rentum-core library.

use thiserror::Error;

/// Main error type for the rentum library.
///
/// Field extraction and review analysis are infallible by contract, so
/// errors surface only at the storage and serialization seams.
#[derive(Error, Debug)]
pub enum RentumError {
    /// Scan storage error.
    #[error("storage error: {0}")]
    Store(String),

    /// A requested record does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// A review submission failed validation.
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the rentum library.
pub type Result<T> = std::result::Result<T, RentumError>;
