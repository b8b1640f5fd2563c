//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Individual click event in a stats response.
///
/// `referrer` is serialized as an explicit `null` when the client sent no
/// `Referer` header, so entries always carry all three fields.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: String,
}
