//! Error types and result types for repository operations.
//!
//! The repository operations defined by this crate are total over their
//! documented inputs: absence is reported as `None` or an empty result, never
//! as an error. The error type exists for the trait seam, so that backends
//! with real failure modes (serialization, I/O) can report them through the
//! same interface.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for document repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<SerdeJsonError> for RepositoryError {
    fn from(err: SerdeJsonError) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}
