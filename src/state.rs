//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::clock::Clock;
use crate::infrastructure::memory::InMemoryRegistry;

/// Handler-visible state: the two services over one shared registry plus
/// the transport-level configuration they need.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryRegistry>>,
    pub stats_service: Arc<StatsService<InMemoryRegistry>>,
    pub base_url: String,
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires services over a shared registry and clock.
    pub fn new(
        registry: Arc<InMemoryRegistry>,
        clock: Arc<dyn Clock>,
        base_url: String,
        behind_proxy: bool,
        default_validity_minutes: i64,
        max_generation_attempts: usize,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            registry.clone(),
            clock,
            default_validity_minutes,
            max_generation_attempts,
        ));
        let stats_service = Arc::new(StatsService::new(registry));

        Self {
            link_service,
            stats_service,
            base_url,
            behind_proxy,
        }
    }
}
