//! Server error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while handling requests or starting up.
///
/// Display strings double as the user-facing `error` payload, so the
/// request variants keep them fixed and put the detail in the logs.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request carried no usable message
    #[error("Missing message")]
    MissingMessage,

    /// The upstream call failed outright; the detail stays in the logs
    #[error("Failed to get response from AI service")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body, mirrored by the widget's transport
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingMessage => StatusCode::BAD_REQUEST,
            Self::Upstream(detail) => {
                tracing::error!("upstream failure: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias using ServerError
pub type Result<T> = std::result::Result<T, ServerError>;
