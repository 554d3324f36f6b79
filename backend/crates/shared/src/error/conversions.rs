//! Error conversions
//!
//! Database error inspection and the HTTP rendering of [`AppError`].

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// PostgreSQL `unique_violation`
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// True when the error is a unique-constraint violation.
///
/// Repositories use this to turn an atomic insert race into a domain
/// error instead of a generic database failure.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code.as_ref() == PG_UNIQUE_VIOLATION),
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Renders `{"status": "error", "error": <message>}`.
///
/// Clients branch on the `status` field, so every error body carries it
/// regardless of the HTTP status code.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "status": "error",
            "error": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_carries_status_field() {
        use axum::response::IntoResponse;

        let response = AppError::bad_request("Email cannot be empty").into_response();
        assert_eq!(response.status().as_u16(), 400);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "Email cannot be empty");
    }
}
