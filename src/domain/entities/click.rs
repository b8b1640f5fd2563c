//! Click entity representing a single successful redirect.

use chrono::{DateTime, Utc};

/// A click recorded when a live short link is resolved.
///
/// Captures the redirect instant, the `Referer` header when the client sent
/// one, and the client address. Clicks are append-only: once recorded they
/// are never modified or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(clicked_at: DateTime<Utc>, referrer: Option<String>, ip: String) -> Self {
        Self {
            clicked_at,
            referrer,
            ip,
        }
    }
}
