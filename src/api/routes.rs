//! API route configuration.

use crate::api::handlers::{create_link_handler, health_handler, redirect_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /shorturls`        - Register a short link
/// - `GET  /shorturls/{code}` - Statistics for a link (expired links included)
/// - `GET  /health`           - Health check
/// - `GET  /{code}`           - Redirect (records a click)
///
/// `/shorturls` and `/health` shadow the code capture, which is why those
/// words are rejected as custom shortcodes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(create_link_handler))
        .route("/shorturls/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
