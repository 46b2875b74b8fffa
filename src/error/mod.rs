// Error types for translate-relay
// Author: kelexine (https://github.com/kelexine)

use crate::models::ErrorResponse;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Message returned when a request carries no text to translate.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

#[derive(Error, Debug)]
pub enum RelayError {
    /// The client request is unusable (missing text, malformed JSON).
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read (too large, aborted).
    #[error("{message}")]
    Body { status: StatusCode, message: String },

    /// The translation or detection provider failed.
    #[error("{0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn no_text() -> Self {
        RelayError::Validation(NO_TEXT_PROVIDED.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Body { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::Validation(_) | RelayError::Body { .. } => "validation_error",
            RelayError::Provider(_) => "provider_error",
            _ => "internal_error",
        }
    }
}

// Body extraction failures keep the status axum chose (e.g. 413)
impl From<BytesRejection> for RelayError {
    fn from(rejection: BytesRejection) -> Self {
        RelayError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// Convert RelayError to the `{"error": ...}` body clients expect
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
