//! HTTP server initialization and runtime setup.
//!
//! Wires the registry, clock, and services into shared state and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::memory::InMemoryRegistry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the listener cannot be
/// bound, or the server loop fails.
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(InMemoryRegistry::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = AppState::new(
        registry,
        clock,
        config.base_url.clone(),
        config.behind_proxy,
        config.default_validity_minutes,
        config.max_generation_attempts,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
