//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom shortcode validation.
static SHORTCODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

/// Request to register a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Validity window in minutes (default: 30).
    #[validate(range(min = 1, message = "Validity must be at least 1 minute"))]
    pub validity: Option<i64>,

    /// Optional caller-chosen shortcode (alphanumeric, up to 10 characters).
    #[validate(length(min = 1, max = 10))]
    #[validate(regex(path = "*SHORTCODE_REGEX", message = "Shortcode must be alphanumeric"))]
    pub shortcode: Option<String>,
}

/// Response for a successfully registered link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    /// Public short URL, `<base>/<code>`.
    #[serde(rename = "shortLink")]
    pub short_link: String,

    /// When the link stops redirecting.
    pub expiry: DateTime<Utc>,
}
