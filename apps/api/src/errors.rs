use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response body is `{"error": "<message>", "code": "<CODE>"}`; clients read
/// `error` and show it as a dismissible notification.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Upstream model failure. The string is the user-facing message;
    /// the underlying cause is logged where it happens.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::MissingConfig(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MISSING_CONFIG",
                msg.clone(),
            ),
            AppError::RateLimited(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED", msg.clone())
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Ein Datenbankfehler ist aufgetreten.".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let (status, code, msg) = AppError::Validation("zu kurz".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(msg, "zu kurz");
    }

    #[test]
    fn test_missing_config_keeps_fixed_message() {
        let (status, _, msg) =
            AppError::MissingConfig("GEMINI_API_KEY not configured".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "GEMINI_API_KEY not configured");
    }

    #[test]
    fn test_upstream_and_rate_limit_statuses() {
        assert_eq!(AppError::Upstream("x".into()).parts().0, StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::RateLimited("x".into()).parts().0,
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_database_error_hides_details() {
        let (status, code, msg) = AppError::Database(sqlx::Error::RowNotFound).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "DATABASE_ERROR");
        assert_eq!(msg, "Ein Datenbankfehler ist aufgetreten.");
    }
}
