//! Catalog query entry points.
//!
//! # Responsibility
//! - Expose the suggestion, search and lookup reads over an injected
//!   catalog.
//! - Keep result shaping inside core; presentation layers render the
//!   returned views as-is.

pub mod engine;
