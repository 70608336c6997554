//! Visit-scheduling use-case service.
//!
//! # Responsibility
//! - Validate, delegate to the mailer, and report the outcome.
//!
//! # Invariants
//! - An invalid request never reaches the mailer.
//! - A send failure is returned to the caller; nothing is retried
//!   automatically.

use super::mailer::{MailerError, VisitMailer};
use super::visit::{VisitRequest, VisitValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BookingResult<T> = Result<T, BookingError>;

/// Scheduling failure surfaced to the requesting view.
#[derive(Debug)]
pub enum BookingError {
    /// The form input is malformed; shown next to the form.
    InvalidRequest(VisitValidationError),
    /// The collaborator could not complete the send; the user may resubmit.
    Send(MailerError),
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(err) => write!(f, "{err}"),
            Self::Send(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRequest(err) => Some(err),
            Self::Send(err) => Some(err),
        }
    }
}

impl From<VisitValidationError> for BookingError {
    fn from(value: VisitValidationError) -> Self {
        Self::InvalidRequest(value)
    }
}

impl From<MailerError> for BookingError {
    fn from(value: MailerError) -> Self {
        Self::Send(value)
    }
}

/// Use-case facade over a mailer implementation.
pub struct BookingService<M: VisitMailer> {
    mailer: M,
}

impl<M: VisitMailer> BookingService<M> {
    pub fn new(mailer: M) -> Self {
        Self { mailer }
    }

    /// Validates `request` and sends the confirmation email.
    ///
    /// Returns the typed failure for the caller to render; the outcome is
    /// also logged either way.
    pub fn schedule_visit(&self, request: &VisitRequest) -> BookingResult<()> {
        request.validate()?;

        match self.mailer.send_confirmation(request) {
            Ok(()) => {
                info!(
                    "event=visit_scheduled module=booking status=ok place={}",
                    request.place_name
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=visit_scheduled module=booking status=error place={} error={}",
                    request.place_name, err
                );
                Err(err.into())
            }
        }
    }
}
