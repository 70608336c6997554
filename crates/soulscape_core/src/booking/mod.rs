//! Visit scheduling: request validation and the email collaborator seam.
//!
//! # Responsibility
//! - Validate visit requests before anything leaves the process.
//! - Define the mailer contract and its transactional-email HTTP
//!   implementation.
//! - Orchestrate the flow so failures surface to the caller instead of
//!   being swallowed.
//!
//! # Invariants
//! - The query engine has no dependency on this module; scheduling is a
//!   detail-page side flow.
//! - A send is attempted at most once per request; retries are manual
//!   resubmissions by the user.

pub mod config;
pub mod mailer;
pub mod service;
pub mod visit;
