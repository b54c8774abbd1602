use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use plant_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `plant_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, error code, and message.
///
/// Store failures are logged and replaced by a sanitized message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        CoreError::InvalidReference { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_REFERENCE",
            err.to_string(),
        ),
        CoreError::CapacityExceeded { .. } => {
            (StatusCode::CONFLICT, "CAPACITY_EXCEEDED", err.to_string())
        }
        CoreError::InvalidType(_) => (StatusCode::BAD_REQUEST, "INVALID_TYPE", err.to_string()),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::ManagerInUse { .. } => {
            (StatusCode::CONFLICT, "MANAGER_IN_USE", err.to_string())
        }
        CoreError::Store(store) => {
            tracing::error!(error = %store, "Entity store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
