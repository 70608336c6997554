//! Domain model for the place catalog.
//!
//! # Responsibility
//! - Define the canonical `Place` record shared by every catalog view.
//! - Keep one structural shape for listing, detail and suggestion renders.
//!
//! # Invariants
//! - A place is identified by the `(state, name)` pair; there is no
//!   synthetic id.
//! - Records are validated once at catalog load; downstream reads may rely
//!   on the validated shape.

pub mod place;
