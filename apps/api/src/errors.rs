use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input missing: {0}")]
    InputMissing(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service is not configured: {0}")]
    MisconfiguredService(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Upstream timed out")]
    UpstreamTimeout,

    #[error("Upstream returned an empty reply")]
    EmptyUpstreamReply,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InputMissing(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MisconfiguredService(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError(_) | AppError::EmptyUpstreamReply => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::InputMissing(msg) => ("INPUT_MISSING", msg.clone()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::MisconfiguredService(msg) => {
                tracing::error!("Misconfigured service: {msg}");
                (
                    "MISCONFIGURED_SERVICE",
                    "The assistant is not configured on this server".to_string(),
                )
            }
            AppError::UpstreamError(msg) => {
                tracing::error!("Upstream error: {msg}");
                ("UPSTREAM_ERROR", msg.clone())
            }
            AppError::UpstreamTimeout => {
                tracing::warn!("Upstream request timed out");
                (
                    "UPSTREAM_TIMEOUT",
                    "The assistant took too long to respond. Please try again.".to_string(),
                )
            }
            AppError::EmptyUpstreamReply => {
                tracing::warn!("Upstream returned no text");
                (
                    "EMPTY_UPSTREAM_REPLY",
                    "The assistant returned an empty reply".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                ("DATABASE_ERROR", "A database error occurred".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "status": "error",
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
