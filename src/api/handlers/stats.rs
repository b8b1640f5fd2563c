//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the accumulated statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// Link metadata, total click count, and the full ordered click log. An
/// expired link still answers here; expiry only gates the redirect.
///
/// # Errors
///
/// Returns 404 if the code was never registered.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.stats_service.link_stats(&code).await?;

    let response = StatsResponse {
        original_url: link.original_url,
        created_at: link.created_at,
        expiry: link.expires_at,
        clicks: link.clicks,
        click_details: link
            .click_log
            .into_iter()
            .map(|click| ClickInfo {
                timestamp: click.clicked_at,
                referrer: click.referrer,
                ip: click.ip,
            })
            .collect(),
    };

    Ok(Json(response))
}
