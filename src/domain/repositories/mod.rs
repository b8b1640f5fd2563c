//! Registry trait definition for the domain layer.
//!
//! The trait defines the contract for shortcode storage; the concrete
//! implementation lives in `crate::infrastructure::memory`. A mock is
//! auto-generated via `mockall` for service unit tests.

pub mod link_registry;

pub use link_registry::LinkRegistry;

#[cfg(test)]
pub use link_registry::MockLinkRegistry;
