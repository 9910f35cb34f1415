//! Gateway error type wrapping solver failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use examsched_domain::{ErrorResponse, SchedulerError};

/// Errors a handler can surface. Solver errors keep their own status
/// mapping; the remaining variants cover gateway-only conditions.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    /// Resource not found (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// Malformed or conflicting request (400 Bad Request)
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Scheduler(err) => err.into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Not found".to_string(),
                    message,
                    diagnostics: None,
                }),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Bad request".to_string(),
                    message,
                    diagnostics: None,
                }),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                        message: err.to_string(),
                        diagnostics: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}
