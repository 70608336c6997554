//! Visit request model and validation.
//!
//! # Responsibility
//! - Carry the `(recipient_email, place_name, visit_date)` triple handed to
//!   the email collaborator.
//! - Reject malformed input before a network call is attempted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// One visit-scheduling submission from the detail page form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRequest {
    /// Address the confirmation email is sent to.
    pub recipient_email: String,
    /// Display name of the place being visited.
    pub place_name: String,
    /// Planned visit date, `YYYY-MM-DD`.
    pub visit_date: String,
}

impl VisitRequest {
    /// Validates field shapes.
    ///
    /// The email check is the usual form-level plausibility test (single
    /// `@`, dotted domain, no whitespace), not RFC 5322; deliverability is
    /// the collaborator's concern.
    pub fn validate(&self) -> Result<(), VisitValidationError> {
        if !EMAIL_RE.is_match(&self.recipient_email) {
            return Err(VisitValidationError::InvalidEmail(
                self.recipient_email.clone(),
            ));
        }
        if self.place_name.trim().is_empty() {
            return Err(VisitValidationError::BlankPlaceName);
        }
        if !DATE_RE.is_match(&self.visit_date) {
            return Err(VisitValidationError::InvalidDate(self.visit_date.clone()));
        }
        Ok(())
    }
}

/// Validation error for one visit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitValidationError {
    InvalidEmail(String),
    BlankPlaceName,
    InvalidDate(String),
}

impl Display for VisitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(value) => write!(f, "`{value}` is not a plausible email address"),
            Self::BlankPlaceName => write!(f, "place name must not be blank"),
            Self::InvalidDate(value) => {
                write!(f, "`{value}` is not a YYYY-MM-DD visit date")
            }
        }
    }
}

impl Error for VisitValidationError {}
