//! Error taxonomy surfaced by the registry and its services.

use chrono::{DateTime, Utc};

/// Errors returned by registry operations.
///
/// Each variant corresponds to one failure kind the transport layer maps to
/// a status code. The registry itself never logs or retries; it only
/// returns these values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Requested custom code fails the alphanumeric/length rules or is a
    /// reserved route word.
    #[error("invalid shortcode '{code}': {reason}")]
    InvalidShortcode { code: String, reason: String },

    /// Original URL is not an absolute http(s) URL.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// Validity window is non-positive or beyond the supported maximum.
    #[error("invalid validity: {minutes} minutes")]
    InvalidValidity { minutes: i64 },

    /// The code is already registered.
    #[error("shortcode '{code}' is already in use")]
    CodeConflict { code: String },

    /// No record exists for the code.
    #[error("shortcode '{code}' not found")]
    NotFound { code: String },

    /// The record exists but its validity window has passed.
    #[error("shortcode '{code}' expired at {expired_at}")]
    Expired {
        code: String,
        expired_at: DateTime<Utc>,
    },

    /// The generator could not find an unused code within its retry budget.
    #[error("could not generate an unused shortcode after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}
