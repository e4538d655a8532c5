use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure produces a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A missing resource reported with a route-specific message.
    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// A request body or query string that could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "message": format!("{entity} not found") }),
                )
            }
            AppError::Core(CoreError::Validation(violations)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": violations }))
            }
            AppError::Core(CoreError::OriginNotAllowed(origin)) => {
                tracing::warn!(%origin, "Rejected request from disallowed origin");
                (
                    StatusCode::FORBIDDEN,
                    json!({
                        "error": "Not allowed by CORS",
                        "code": "ORIGIN_NOT_ALLOWED",
                    }),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
