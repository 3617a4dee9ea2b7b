//! Error types for Shutterbay
//!
//! All errors in the application are converted to `AppError`,
//! which implements `IntoResponse` for proper HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::auth::session::SessionError;
use crate::data::StoreError;

/// Generic client-facing message for server-side failures.
///
/// Details are logged; clients only ever see this string.
pub const GENERIC_ERROR_MESSAGE: &str = "An error has occurred. Please try again.";

/// Application-wide error type
///
/// This enum represents all possible errors that can occur
/// in the application. It implements `IntoResponse` to
/// automatically convert errors to appropriate HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request field (422)
    #[error("{0}")]
    Validation(String),

    /// Registration conflict, email already taken (409)
    #[error("{0}")]
    Conflict(String),

    /// Credentials did not match any account (401)
    #[error("{0}")]
    Unauthorized(String),

    /// No valid session cookie on a protected operation (403)
    #[error("{0}")]
    Forbidden(String),

    /// Store read/parse/write failure (500)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Session token could not be produced (500)
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Configuration error (500)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (500)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl IntoResponse for AppError {
    /// Convert error to HTTP response
    ///
    /// Maps each error variant to its status code and the API's
    /// `{"message": …}` JSON envelope.
    fn into_response(self) -> Response {
        use axum::Json;

        let (status, message, error_type) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone(), "validation")
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), "conflict"),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), "unauthorized"),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), "forbidden"),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                    "store",
                )
            }
            AppError::Session(err) => {
                tracing::error!(error = %err, "Session token operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                    "session",
                )
            }
            AppError::Config(msg) => {
                tracing::error!(error = %msg, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                    "config",
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                    "internal",
                )
            }
        };

        use crate::metrics::ERRORS_TOTAL;
        ERRORS_TOTAL.with_label_values(&[error_type]).inc();

        let body = Json(serde_json::json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
