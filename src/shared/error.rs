//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::validation::PayloadError;

/// Message returned for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invariant violated: {0}")]
    Invariant(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Invariant(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PayloadError> for AppError {
    fn from(error: PayloadError) -> Self {
        AppError::Invariant(error.translate().to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::Invariant("request body harus berupa JSON yang valid".into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::NotFound(message)
            | AppError::Invariant(message)
            | AppError::Unauthorized(message)
            | AppError::Forbidden(message) => ErrorResponse {
                status: "fail",
                message,
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse {
                    status: "error",
                    message: INTERNAL_ERROR_MESSAGE.into(),
                }
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ErrorResponse {
                    status: "error",
                    message: INTERNAL_ERROR_MESSAGE.into(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
