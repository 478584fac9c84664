//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use catalog_core::DomainError;
use thiserror::Error;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Repository failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request failed field validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Upload bytes could not be written
    #[error("Upload failed: {0}")]
    Upload(#[source] std::io::Error),

    /// Upload is missing or carries an unusable filename
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an invalid upload error
    pub fn invalid_upload(msg: impl Into<String>) -> Self {
        Self::InvalidUpload(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::Validation(_) | Self::InvalidUpload(_) => 400,
            Self::Upload(_) | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Upload(_) => "UPLOAD_FAILURE",
            Self::InvalidUpload(_) => "INVALID_UPLOAD",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
