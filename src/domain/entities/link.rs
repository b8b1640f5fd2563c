//! Short link entity representing a registered shortcode.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A registered short link with its accumulated click history.
///
/// `code`, `original_url`, `created_at`, and `expires_at` are fixed at
/// creation; only `clicks` and `click_log` change afterwards, and always
/// together (`clicks == click_log.len()`).
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
    pub click_log: Vec<Click>,
}

impl ShortLink {
    /// Creates a fresh link with an empty click history.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            clicks: 0,
            click_log: Vec::new(),
        }
    }

    /// Returns true if the link has passed its expiry at instant `t`.
    ///
    /// Strict comparison: a link is still valid exactly at `expires_at`.
    pub fn is_expired_at(&self, t: DateTime<Utc>) -> bool {
        t > self.expires_at
    }

    /// Appends a click, keeping the counter and the log in step.
    pub fn record_click(&mut self, click: Click) {
        self.clicks += 1;
        self.click_log.push(click);
    }
}

/// Input data for registering a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
