//! Auth Error Types
//!
//! Auth-specific error variants. Credential failures keep the legacy
//! wire contract (`200 OK` with a `status` field); everything else is
//! rendered through the unified `kernel::error::AppError`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

use crate::presentation::dto::StatusResponse;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Which half of a login failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    /// No user with that email
    UnknownEmail,
    /// User exists, password did not verify
    PasswordMismatch,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that already exists
    #[error("Duplicate email")]
    DuplicateEmail,

    /// Login failed
    #[error("Invalid login")]
    InvalidCredentials(CredentialFailure),

    /// Malformed request body or field
    #[error("{0}")]
    Validation(String),

    #[error("Password hash error: {0}")]
    Hash(#[from] PasswordHashError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Credential store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Message rendered to clients for infrastructure failures
    pub const INTERNAL_MESSAGE: &'static str = "Internal error";

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateEmail => ErrorKind::Conflict,
            AuthError::InvalidCredentials(_) => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Hash(_)
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Store outage, hashing or signing failure: nothing the client did wrong
    pub fn is_infrastructure(&self) -> bool {
        self.kind().is_server_error()
    }

    /// Get the HTTP status code for this error
    ///
    /// Duplicate email and bad credentials are reported with `200 OK`;
    /// clients branch on the body's `status` field. Everything else uses
    /// the status of its [`ErrorKind`].
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::DuplicateEmail | AuthError::InvalidCredentials(_) => StatusCode::OK,
            _ => StatusCode::from_u16(self.kind().status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Convert to AppError (infrastructure details stay out of the message)
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(msg) => AppError::bad_request(msg.clone()),
            err if err.is_infrastructure() => AppError::new(err.kind(), Self::INTERNAL_MESSAGE),
            err => AppError::new(err.kind(), err.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials(failure) => {
                tracing::warn!(?failure, "Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        match self {
            AuthError::DuplicateEmail => {
                (status, Json(StatusResponse::error("Duplicate email"))).into_response()
            }
            AuthError::InvalidCredentials(CredentialFailure::UnknownEmail) => {
                (status, Json(StatusResponse::error("Invalid login"))).into_response()
            }
            AuthError::InvalidCredentials(CredentialFailure::PasswordMismatch) => {
                (status, Json(StatusResponse::user_false())).into_response()
            }
            err => err.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}
