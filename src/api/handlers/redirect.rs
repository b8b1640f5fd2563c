//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use std::net::SocketAddr;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The click (timestamp, optional referrer, client address) is recorded
/// atomically with the lookup before the redirect is returned; an expired
/// or unknown code records nothing.
///
/// # Errors
///
/// Returns 404 for an unknown code and 410 once the validity window has
/// passed.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let ip = client_ip(&headers, addr, state.behind_proxy);

    let link = state.link_service.resolve(&code, referrer, ip).await?;

    debug!(code = %code, clicks = link.clicks, "redirecting");

    Ok(Redirect::temporary(&link.original_url))
}
