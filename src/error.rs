//! HTTP boundary error type and status mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::RegistryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Error rendered to HTTP clients.
///
/// Registry errors convert into one of these variants via `From`, so
/// handlers can use `?` on service calls and let the status mapping live
/// in one place.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Gone { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Gone { message, details } => (StatusCode::GONE, "gone", message, details),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidShortcode { code, reason } => Self::bad_request(
                format!("Invalid shortcode: {reason}"),
                json!({ "shortcode": code }),
            ),
            RegistryError::InvalidUrl { reason } => {
                Self::bad_request("Invalid URL", json!({ "reason": reason }))
            }
            RegistryError::InvalidValidity { minutes } => Self::bad_request(
                "Validity must be a positive number of minutes",
                json!({ "validity": minutes }),
            ),
            RegistryError::CodeConflict { code } => {
                Self::conflict("Shortcode already in use", json!({ "shortcode": code }))
            }
            RegistryError::NotFound { code } => {
                Self::not_found("Shortcode not found", json!({ "shortcode": code }))
            }
            RegistryError::Expired { code, expired_at } => Self::gone(
                "Shortcode expired",
                json!({ "shortcode": code, "expired_at": expired_at }),
            ),
            RegistryError::GenerationExhausted { attempts } => Self::internal(
                "Failed to generate a unique shortcode",
                json!({ "attempts": attempts }),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        Self::bad_request("Request validation failed", details)
    }
}
