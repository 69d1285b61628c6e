//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// One of the required review fields is missing from the request.
    #[error("Missing required fields")]
    Validation,

    /// Request body or content type cannot be interpreted.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// HTTP method not supported on this route.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Blob store upload failed. The review is not persisted.
    #[error("Failed to upload attachment: {0}")]
    StorageUpload(String),

    /// Document store read or insert failed.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation | Self::MalformedRequest(_) => 400,
            Self::MethodNotAllowed => 405,
            Self::StorageUpload(_) | Self::Persistence(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::StorageUpload(_) => "STORAGE_UPLOAD_FAILED",
            Self::Persistence(_) => "PERSISTENCE_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
