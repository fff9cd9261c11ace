use axum::{
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::ALLOW_ANY_ORIGIN;
use crate::shared::types::{ErrorBody, HttpResponse};

/// Errors raised while handling an event.
///
/// `Validation`, `Unauthorized` and `MethodNotAllowed` are part of the handler
/// contract and become structured JSON responses. Every other variant is an
/// unhandled failure that leaves `handle` as an `Err`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request body is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code for the errors the handler contract answers itself.
    pub fn client_status(&self) -> Option<StatusCode> {
        match self {
            AppError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::MethodNotAllowed => Some(StatusCode::METHOD_NOT_ALLOWED),
            _ => None,
        }
    }

    /// Turns a contract error into its JSON response and hands every other
    /// error back to the caller unchanged.
    pub fn into_client_response(self) -> Result<HttpResponse> {
        let Some(status) = self.client_status() else {
            return Err(self);
        };

        let message = match self {
            AppError::Validation(msg) => msg,
            other => other.to_string(),
        };

        HttpResponse::json(status, &ErrorBody::new(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self
            .client_status()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match self {
            AppError::Validation(ref msg) => msg.clone(),
            AppError::Unauthorized | AppError::MethodNotAllowed => self.to_string(),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            ref other => {
                tracing::error!("Unhandled error: {}", other);
                "Internal server error".to_string()
            }
        };

        (
            status,
            [(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ANY_ORIGIN)],
            Json(ErrorBody::new(message)),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
