//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Register a short link
//! - `GET  /shorturls/{code}` - Link statistics
//! - `GET  /{code}`           - Short link redirect
//! - `GET  /health`           - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response spans
//! - **Access log** - One combined-log line per request
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(middleware::from_fn(access_log::access_log_mw))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
