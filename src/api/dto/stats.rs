//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;

/// Statistics for a single short link.
///
/// Returned for expired links too; only the redirect path enforces expiry.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
    /// Click events in the order they occurred.
    pub click_details: Vec<ClickInfo>,
}
