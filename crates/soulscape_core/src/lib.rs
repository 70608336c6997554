//! Core domain logic for Soulscape, a travel-discovery catalog of Indian
//! states and notable places.
//! This crate is the single source of truth for catalog and booking
//! invariants.

pub mod booking;
pub mod catalog;
pub mod logging;
pub mod model;
pub mod query;
pub mod route;

pub use booking::config::MailerConfig;
pub use booking::mailer::{HttpVisitMailer, MailerError, MailerResult, VisitMailer};
pub use booking::service::{BookingError, BookingResult, BookingService};
pub use booking::visit::{VisitRequest, VisitValidationError};
pub use catalog::{bundled_catalog, load_from_file, load_from_str, Catalog, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::place::{Place, PlaceValidationError};
pub use query::engine::{QueryEngine, StateMatch, Suggestion, SUGGESTION_LIMIT};
pub use route::{
    decode_segment, encode_segment, parse_place_route, place_route, RouteError, RouteResult,
};

/// Minimal health-check API for adapter smoke integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
