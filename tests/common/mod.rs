#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::ConnectInfo;
use axum::routing::{get, post};
use chrono::Utc;
use urlcut::api::handlers::{create_link_handler, redirect_handler, stats_handler};
use urlcut::domain::clock::ManualClock;
use urlcut::infrastructure::memory::InMemoryRegistry;
use urlcut::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:8000";

/// Builds handler state over a fresh registry and a frozen clock.
///
/// Returns the clock and registry handles so tests can advance time and
/// inspect stored records directly.
pub fn create_test_state() -> (AppState, Arc<ManualClock>, Arc<InMemoryRegistry>) {
    let registry = Arc::new(InMemoryRegistry::new());
    let clock = Arc::new(ManualClock::new(Utc::now()));

    let state = AppState::new(
        registry.clone(),
        clock.clone(),
        TEST_BASE_URL.to_string(),
        false,
        30,
        10,
    );

    (state, clock, registry)
}

/// Router with the three public endpoints and a fake peer address.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorturls", post(create_link_handler))
        .route("/shorturls/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

/// Injects a fixed `ConnectInfo` so handlers that read the peer address
/// work under `TestServer`, which has no real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
