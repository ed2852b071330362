use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::resume::parser::ParseError;

pub const PARSE_FAILED_MESSAGE: &str = "Failed to parse resume";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("File too large. Maximum size is 16 MiB")]
    PayloadTooLarge,

    #[error("Resume parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::Parse(e) => {
                tracing::error!("Resume parsing failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PARSE_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Renders a handler panic as a 500 `{"error": "<panic message>"}`.
/// Installed through `CatchPanicLayer::custom` in `build_router`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal(anyhow::anyhow!(panic_message(panic.as_ref()))).into_response()
}

pub(crate) fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
