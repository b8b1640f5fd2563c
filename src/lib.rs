//! # urlcut
//!
//! An in-memory URL shortening service with per-redirect click analytics,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the registry trait, the
//!   clock abstraction, and the error taxonomy
//! - **Application Layer** ([`application`]) - Creation/resolve/stats rules
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory registry
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or caller-chosen alphanumeric shortcodes
//! - Per-link validity window with read-time expiry (410 after the window)
//! - Click analytics: counter plus an ordered log of
//!   timestamp/referrer/client address per redirect
//! - Injectable clock for deterministic expiry tests
//!
//! All state lives in process memory; a restart starts from an empty
//! registry.
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export BASE_URL="http://localhost:8000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, NewShortLink, ShortLink};
    pub use crate::domain::error::RegistryError;
    pub use crate::domain::repositories::LinkRegistry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryRegistry;
    pub use crate::state::AppState;
}
