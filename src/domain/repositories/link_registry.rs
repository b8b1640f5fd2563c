//! Registry trait for short link storage and click accumulation.

use crate::domain::entities::{Click, NewShortLink, ShortLink};
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// The authoritative store for shortcode records.
///
/// All mutation of [`ShortLink`] records goes through this interface; no
/// caller ever holds a mutable reference to a stored record. Every
/// operation is atomic with respect to every other operation at least at
/// per-code granularity.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryRegistry`] - lock-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRegistry: Send + Sync {
    /// Registers a new short link.
    ///
    /// Either the record is fully inserted or the store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CodeConflict`] if the code is already
    /// registered. Two concurrent inserts racing on one code admit exactly
    /// one winner.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, RegistryError>;

    /// Returns true if the code is currently registered.
    ///
    /// Only a fast-path filter for the code generator; [`Self::insert`] is
    /// the collision authority.
    async fn contains(&self, code: &str) -> Result<bool, RegistryError>;

    /// Records a visit: checks expiry and appends the click atomically.
    ///
    /// The expiry check uses `click.clicked_at` and is evaluated against
    /// the same snapshot as the mutation, so an expired link never gains a
    /// click. Exactly at the expiry instant the link is still valid.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is absent, or
    /// [`RegistryError::Expired`] if the validity window has passed.
    async fn record_visit(&self, code: &str, click: Click) -> Result<ShortLink, RegistryError>;

    /// Returns a read-only copy of the record, or `None` if absent.
    ///
    /// Deliberately applies no expiry check: statistics stay readable for
    /// expired links.
    async fn snapshot(&self, code: &str) -> Result<Option<ShortLink>, RegistryError>;

    /// Number of registered codes, expired ones included.
    async fn link_count(&self) -> Result<usize, RegistryError>;
}
