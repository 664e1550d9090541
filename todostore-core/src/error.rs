//! Error types and result types for store operations.
//!
//! The untyped store operations are permissive: a query that matches nothing or an id that is
//! not in the collection yields an empty or unchanged result, never an error. [`StoreError`]
//! covers the remaining failure modes, which come from typed document conversion, malformed
//! query input and the backend seam.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting between typed documents and records.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The document does not serialize to a field mapping (e.g. it is a bare string or array).
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// A query could not be built from the given input.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
