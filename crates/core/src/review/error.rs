//! Review flow error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from the review submission and listing flow.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// One of `name`, `rating`, `comment` is absent.
    #[error("Missing required fields")]
    MissingFields,

    /// Attachment upload failed; the review was not persisted.
    #[error("failed to upload attachment: {0}")]
    Upload(#[from] StorageError),

    /// Document store call failed.
    #[error("document store error: {0}")]
    Store(String),
}

impl ReviewError {
    /// Create a store error.
    #[must_use]
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
