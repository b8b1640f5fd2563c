//! Link creation and resolution service.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, NewShortLink, ShortLink};
use crate::domain::error::RegistryError;
use crate::domain::repositories::LinkRegistry;
use crate::utils::code_generator::{GENERATED_CODE_LENGTH, generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;

/// Upper bound on the validity window: ten years in minutes.
const MAX_VALIDITY_MINUTES: i64 = 10 * 365 * 24 * 60;

/// Service for registering shortcodes and resolving redirects.
///
/// Owns the creation rules (URL canonicalization, validity window, code
/// validation and generation) and delegates storage atomicity to the
/// registry.
pub struct LinkService<R: LinkRegistry> {
    registry: Arc<R>,
    clock: Arc<dyn Clock>,
    default_validity_minutes: i64,
    max_generation_attempts: usize,
}

impl<R: LinkRegistry> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `max_generation_attempts` bounds the collision retry loop for
    /// generated codes.
    pub fn new(
        registry: Arc<R>,
        clock: Arc<dyn Clock>,
        default_validity_minutes: i64,
        max_generation_attempts: usize,
    ) -> Self {
        Self {
            registry,
            clock,
            default_validity_minutes,
            max_generation_attempts,
        }
    }

    /// Registers a short link for `original_url`.
    ///
    /// # Arguments
    ///
    /// - `original_url` - target URL, canonicalized before storage
    /// - `validity_minutes` - lifetime of the link; defaults to the
    ///   configured window when absent
    /// - `custom_code` - caller-chosen code (validated if provided);
    ///   otherwise a random 6-character code is generated
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidUrl`] for non-http(s) or relative URLs
    /// - [`RegistryError::InvalidValidity`] for a window outside
    ///   `1..=MAX_VALIDITY_MINUTES`
    /// - [`RegistryError::InvalidShortcode`] for a malformed custom code
    /// - [`RegistryError::CodeConflict`] when the custom code is taken
    /// - [`RegistryError::GenerationExhausted`] when the generator cannot
    ///   find a free code within its retry budget
    pub async fn create_short_link(
        &self,
        original_url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<ShortLink, RegistryError> {
        let original_url = normalize_url(&original_url).map_err(|e| RegistryError::InvalidUrl {
            reason: e.to_string(),
        })?;

        let minutes = validity_minutes.unwrap_or(self.default_validity_minutes);
        if !(1..=MAX_VALIDITY_MINUTES).contains(&minutes) {
            return Err(RegistryError::InvalidValidity { minutes });
        }

        let created_at = self.clock.now();
        let expires_at = created_at + Duration::minutes(minutes);

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            // The insert is the collision authority; no pre-check needed.
            return self
                .registry
                .insert(NewShortLink {
                    code: custom,
                    original_url,
                    created_at,
                    expires_at,
                })
                .await;
        }

        for _ in 0..self.max_generation_attempts {
            let code = generate_code(GENERATED_CODE_LENGTH);

            // Fast-path filter; a racing insert can still win the code
            // between this check and ours, so conflicts loop again.
            if self.registry.contains(&code).await? {
                continue;
            }

            match self
                .registry
                .insert(NewShortLink {
                    code,
                    original_url: original_url.clone(),
                    created_at,
                    expires_at,
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(RegistryError::CodeConflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(RegistryError::GenerationExhausted {
            attempts: self.max_generation_attempts,
        })
    }

    /// Resolves a code for redirect, recording the click.
    ///
    /// The click is stamped with the injected clock's current instant; the
    /// registry checks expiry against that same instant.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] or [`RegistryError::Expired`];
    /// neither leaves a click behind.
    pub async fn resolve(
        &self,
        code: &str,
        referrer: Option<String>,
        ip: String,
    ) -> Result<ShortLink, RegistryError> {
        let click = Click::new(self.clock.now(), referrer, ip);
        self.registry.record_visit(code, click).await
    }

    /// Joins the configured base URL and a code into the public short link.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::repositories::MockLinkRegistry;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service_at(
        registry: MockLinkRegistry,
        start: chrono::DateTime<Utc>,
    ) -> LinkService<MockLinkRegistry> {
        LinkService::new(Arc::new(registry), Arc::new(ManualClock::new(start)), 30, 10)
    }

    fn stored(new_link: &NewShortLink) -> ShortLink {
        ShortLink::new(
            new_link.code.clone(),
            new_link.original_url.clone(),
            new_link.created_at,
            new_link.expires_at,
        )
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let start = Utc::now();
        let mut registry = MockLinkRegistry::new();

        registry.expect_contains().times(1).returning(|_| Ok(false));
        registry
            .expect_insert()
            .withf(move |new_link| {
                new_link.code.len() == 6
                    && new_link.code.chars().all(|c| c.is_ascii_alphanumeric())
                    && new_link.created_at == start
                    && new_link.expires_at == start + Duration::minutes(30)
            })
            .times(1)
            .returning(|new_link| Ok(stored(&new_link)));

        let service = service_at(registry, start);

        let link = service
            .create_short_link("https://example.com/page".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com/page");
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn test_create_honors_explicit_validity() {
        let start = Utc::now();
        let mut registry = MockLinkRegistry::new();

        registry.expect_contains().returning(|_| Ok(false));
        registry
            .expect_insert()
            .withf(move |new_link| new_link.expires_at == start + Duration::minutes(1))
            .times(1)
            .returning(|new_link| Ok(stored(&new_link)));

        let service = service_at(registry, start);

        service
            .create_short_link("https://example.com/".to_string(), Some(1), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let start = Utc::now();
        let mut registry = MockLinkRegistry::new();

        registry.expect_contains().times(0);
        registry
            .expect_insert()
            .withf(|new_link| new_link.code == "abc123")
            .times(1)
            .returning(|new_link| Ok(stored(&new_link)));

        let service = service_at(registry, start);

        let link = service
            .create_short_link(
                "https://example.com/".to_string(),
                None,
                Some("abc123".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "abc123");
    }

    #[tokio::test]
    async fn test_create_custom_code_conflict() {
        let mut registry = MockLinkRegistry::new();

        registry
            .expect_insert()
            .times(1)
            .returning(|new_link| Err(RegistryError::CodeConflict {
                code: new_link.code,
            }));

        let service = service_at(registry, Utc::now());

        let err = service
            .create_short_link(
                "https://example.com/".to_string(),
                None,
                Some("taken1".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::CodeConflict { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_custom_code() {
        let mut registry = MockLinkRegistry::new();
        registry.expect_insert().times(0);

        let service = service_at(registry, Utc::now());

        let err = service
            .create_short_link(
                "https://example.com/".to_string(),
                None,
                Some("bad shortcode!".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidShortcode { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_url() {
        let registry = MockLinkRegistry::new();
        let service = service_at(registry, Utc::now());

        let err = service
            .create_short_link("not-a-url".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_validity() {
        let registry = MockLinkRegistry::new();
        let service = service_at(registry, Utc::now());

        for minutes in [0, -5] {
            let err = service
                .create_short_link("https://example.com/".to_string(), Some(minutes), None)
                .await
                .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidValidity { .. }));
        }
    }

    #[tokio::test]
    async fn test_create_rejects_absurd_validity() {
        let registry = MockLinkRegistry::new();
        let service = service_at(registry, Utc::now());

        let err = service
            .create_short_link(
                "https://example.com/".to_string(),
                Some(MAX_VALIDITY_MINUTES + 1),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidValidity { .. }));
    }

    #[tokio::test]
    async fn test_generation_retries_past_taken_codes() {
        let start = Utc::now();
        let mut registry = MockLinkRegistry::new();

        let calls = AtomicUsize::new(0);
        registry.expect_contains().times(3).returning(move |_| {
            // First two draws collide, third is free.
            Ok(calls.fetch_add(1, Ordering::SeqCst) < 2)
        });
        registry
            .expect_insert()
            .times(1)
            .returning(|new_link| Ok(stored(&new_link)));

        let service = service_at(registry, start);

        let link = service
            .create_short_link("https://example.com/".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), 6);
    }

    #[tokio::test]
    async fn test_generation_exhausted_after_retry_budget() {
        let mut registry = MockLinkRegistry::new();

        registry.expect_contains().times(10).returning(|_| Ok(true));
        registry.expect_insert().times(0);

        let service = service_at(registry, Utc::now());

        let err = service
            .create_short_link("https://example.com/".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::GenerationExhausted { .. }));
    }

    #[tokio::test]
    async fn test_resolve_stamps_click_with_clock_instant() {
        let start = Utc::now();
        let mut registry = MockLinkRegistry::new();

        registry
            .expect_record_visit()
            .withf(move |code, click| {
                code == "abc123"
                    && click.clicked_at == start
                    && click.referrer.as_deref() == Some("https://google.com")
                    && click.ip == "192.0.2.1"
            })
            .times(1)
            .returning(|code, click| {
                let mut link = ShortLink::new(
                    code.to_string(),
                    "https://example.com/".to_string(),
                    click.clicked_at,
                    click.clicked_at + Duration::minutes(30),
                );
                link.record_click(click);
                Ok(link)
            });

        let service = service_at(registry, start);

        let link = service
            .resolve(
                "abc123",
                Some("https://google.com".to_string()),
                "192.0.2.1".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(link.clicks, 1);
    }

    #[tokio::test]
    async fn test_resolve_propagates_expired() {
        let start = Utc::now();
        let mut registry = MockLinkRegistry::new();

        registry
            .expect_record_visit()
            .times(1)
            .returning(move |code, _| {
                Err(RegistryError::Expired {
                    code: code.to_string(),
                    expired_at: start,
                })
            });

        let service = service_at(registry, start);

        let err = service
            .resolve("stale1", None, "192.0.2.1".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::Expired { .. }));
    }

    #[test]
    fn test_short_url_joins_base_and_code() {
        let service = service_at(MockLinkRegistry::new(), Utc::now());

        assert_eq!(
            service.short_url("http://localhost:8000", "abc123"),
            "http://localhost:8000/abc123"
        );
        assert_eq!(
            service.short_url("http://localhost:8000/", "abc123"),
            "http://localhost:8000/abc123"
        );
    }
}
