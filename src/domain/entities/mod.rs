//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A registered shortcode and its click history
//! - [`Click`] - A single recorded redirect
//!
//! # Design Pattern
//!
//! Creation input is split into its own struct ([`NewShortLink`]) so the
//! registry alone decides how records come to life.

pub mod click;
pub mod link;

pub use click::Click;
pub use link::{NewShortLink, ShortLink};
