//! HTTP error handling and response conversion.
//!
//! Handler errors map to an HTTP status and a `{"error": "..."}` JSON body.
//! Server-side failures are logged at `error`, client mistakes at `warn`.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request could not be understood (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::ValidationError(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            _ => tracing::warn!("error={}", self),
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownCategory(_) | DomainError::UnconfiguredCategory(_) => {
                AppError::BadRequest(err.to_string())
            }
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InvalidColor(msg) => {
                tracing::error!(invalid_color = %msg);
                AppError::Internal(msg)
            }
        }
    }
}
