//! In-memory implementation of the link registry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{Click, NewShortLink, ShortLink};
use crate::domain::error::RegistryError;
use crate::domain::repositories::LinkRegistry;

/// Process-local registry backed by a lock-guarded map.
///
/// One `RwLock` guards the whole map: inserts and visit mutations take the
/// write lock, lookups the read lock. Nothing awaits or performs I/O while
/// a guard is held, so every operation completes in bounded time. Records
/// are never removed; expiry is a read-time check in [`record_visit`].
///
/// [`record_visit`]: LinkRegistry::record_visit
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ShortLink>> {
        self.links.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ShortLink>> {
        self.links.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkRegistry for InMemoryRegistry {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, RegistryError> {
        let mut links = self.write();

        match links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(RegistryError::CodeConflict {
                code: new_link.code,
            }),
            Entry::Vacant(slot) => {
                let link = ShortLink::new(
                    new_link.code,
                    new_link.original_url,
                    new_link.created_at,
                    new_link.expires_at,
                );
                Ok(slot.insert(link).clone())
            }
        }
    }

    async fn contains(&self, code: &str) -> Result<bool, RegistryError> {
        Ok(self.read().contains_key(code))
    }

    async fn record_visit(&self, code: &str, click: Click) -> Result<ShortLink, RegistryError> {
        let mut links = self.write();

        let link = links.get_mut(code).ok_or_else(|| RegistryError::NotFound {
            code: code.to_string(),
        })?;

        if link.is_expired_at(click.clicked_at) {
            return Err(RegistryError::Expired {
                code: code.to_string(),
                expired_at: link.expires_at,
            });
        }

        link.record_click(click);
        Ok(link.clone())
    }

    async fn snapshot(&self, code: &str) -> Result<Option<ShortLink>, RegistryError> {
        Ok(self.read().get(code).cloned())
    }

    async fn link_count(&self) -> Result<usize, RegistryError> {
        Ok(self.read().len())
    }
}
