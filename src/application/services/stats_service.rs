//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::error::RegistryError;
use crate::domain::repositories::LinkRegistry;

/// Service for reading accumulated click statistics.
///
/// Statistics deliberately skip the expiry check: an expired link's history
/// stays readable, only its redirect stops working.
pub struct StatsService<R: LinkRegistry> {
    registry: Arc<R>,
}

impl<R: LinkRegistry> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Returns the full record snapshot for a code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code was never registered.
    pub async fn link_stats(&self, code: &str) -> Result<ShortLink, RegistryError> {
        self.registry
            .snapshot(code)
            .await?
            .ok_or_else(|| RegistryError::NotFound {
                code: code.to_string(),
            })
    }

    /// Number of registered codes, used by the health endpoint.
    pub async fn total_links(&self) -> Result<usize, RegistryError> {
        self.registry.link_count().await
    }
}
