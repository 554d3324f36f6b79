//! Files Error Types
//!
//! Files-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// Files-specific result type alias
pub type FilesResult<T> = Result<T, FilesError>;

/// Files-specific error variants
#[derive(Debug, Error)]
pub enum FilesError {
    /// Bad file name, key, or form field
    #[error("{0}")]
    Validation(String),

    /// Upload exceeds the configured body limit
    #[error("Upload too large")]
    PayloadTooLarge,

    /// Signature missing, malformed, or not matching
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature valid but past its expiry
    #[error("Signed URL expired")]
    SignatureExpired,

    /// No object under the key
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Upload or catalog write failed; reported with the legacy upload body
    #[error("Upload failed: {0}")]
    UploadFailed(Box<FilesError>),

    /// Object store I/O failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Catalog failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FilesError {
    /// Body message of a failed upload
    pub const UPLOAD_FAILED_MESSAGE: &'static str =
        "Failed to upload file or create PDFFile document";

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilesError::Validation(_) => ErrorKind::BadRequest,
            FilesError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            FilesError::InvalidSignature | FilesError::SignatureExpired => ErrorKind::Forbidden,
            FilesError::ObjectNotFound(_) => ErrorKind::NotFound,
            FilesError::UploadFailed(_)
            | FilesError::Storage(_)
            | FilesError::Database(_)
            | FilesError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Wrap a failure from the upload path
    ///
    /// Client mistakes keep their own status; everything else becomes
    /// [`FilesError::UploadFailed`].
    pub fn into_upload_failure(self) -> Self {
        match self {
            FilesError::Validation(_) | FilesError::PayloadTooLarge | FilesError::UploadFailed(_) => {
                self
            }
            other => FilesError::UploadFailed(Box::new(other)),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            FilesError::UploadFailed(cause) => {
                tracing::error!(error = %cause, "File upload failed");
            }
            FilesError::Storage(e) => {
                tracing::error!(error = %e, "Object store error");
            }
            FilesError::Database(e) => {
                tracing::error!(error = %e, "File catalog database error");
            }
            FilesError::Internal(msg) => {
                tracing::error!(message = %msg, "Files internal error");
            }
            FilesError::InvalidSignature | FilesError::SignatureExpired => {
                tracing::warn!(error = %self, "Rejected signed URL");
            }
            _ => {
                tracing::debug!(error = %self, "Files error");
            }
        }
    }
}

impl From<FilesError> for AppError {
    fn from(err: FilesError) -> Self {
        let kind = err.kind();
        match err {
            FilesError::Validation(msg) => AppError::new(kind, msg),
            _ if kind.is_server_error() => AppError::new(kind, "Internal error"),
            err => AppError::new(kind, err.to_string()),
        }
    }
}

impl From<AppError> for FilesError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => FilesError::Validation(err.message().to_string()),
            _ => FilesError::Internal(err.to_string()),
        }
    }
}

impl From<MultipartRejection> for FilesError {
    fn from(rejection: MultipartRejection) -> Self {
        FilesError::Validation(rejection.body_text())
    }
}

impl From<MultipartError> for FilesError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            FilesError::PayloadTooLarge
        } else {
            FilesError::Validation(err.body_text())
        }
    }
}

impl IntoResponse for FilesError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        match self {
            FilesError::UploadFailed(_) => (
                status,
                Json(json!({ "error": Self::UPLOAD_FAILED_MESSAGE })),
            )
                .into_response(),
            err => AppError::from(err).into_response(),
        }
    }
}
