//! Place domain model.
//!
//! # Responsibility
//! - Define the canonical record behind listing, detail and suggestion views.
//! - Provide the validation applied to every record at catalog load.
//!
//! # Invariants
//! - `name` is non-blank and unique within the owning state's sequence
//!   (uniqueness is enforced by the catalog loader, which owns cross-record
//!   context).
//! - `name` is not guaranteed globally unique; identity is always the
//!   `(state, name)` pair.
//! - Free-text fields carry display content only and are never machine
//!   parsed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One notable place inside a state's catalog entry.
///
/// The record mirrors the bundled dataset shape field for field. `image_url`
/// may be an absolute URL or a bundled asset path and is used for display
/// only; `timings` and `ticket_price` are free text (a price may read
/// "Free").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Place {
    /// Display name; one half of the navigation identity.
    pub name: String,
    /// Free-text description shown on listing cards and the detail view.
    pub description: String,
    /// Display-only image location; not validated as a URL.
    pub image_url: String,
    /// Free-text opening hours.
    pub timings: String,
    /// Free-text entry fee.
    pub ticket_price: String,
}

impl Place {
    /// Validates record-local invariants.
    ///
    /// Cross-record rules (duplicate names inside one state) live in the
    /// catalog loader.
    pub fn validate(&self) -> Result<(), PlaceValidationError> {
        if self.name.trim().is_empty() {
            return Err(PlaceValidationError::BlankName);
        }
        Ok(())
    }
}

/// Validation error for one place record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceValidationError {
    /// `name` is empty or whitespace-only and cannot serve as an identity.
    BlankName,
}

impl Display for PlaceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "place name must not be blank"),
        }
    }
}

impl Error for PlaceValidationError {}

#[cfg(test)]
mod tests {
    use super::{Place, PlaceValidationError};

    fn sample() -> Place {
        Place {
            name: "Hawa Mahal".to_string(),
            description: "Palace of winds in Jaipur.".to_string(),
            image_url: "/images/rajasthan/hawa-mahal.jpg".to_string(),
            timings: "9:00 AM - 5:00 PM".to_string(),
            ticket_price: "INR 50".to_string(),
        }
    }

    #[test]
    fn valid_place_passes_validation() {
        sample().validate().expect("sample place should be valid");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut place = sample();
        place.name = "   ".to_string();
        assert_eq!(place.validate(), Err(PlaceValidationError::BlankName));
    }

    #[test]
    fn free_text_fields_may_be_empty() {
        let mut place = sample();
        place.timings = String::new();
        place.ticket_price = String::new();
        place.validate().expect("free-text fields are unconstrained");
    }
}
