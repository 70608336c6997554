//! Mailer contract and the transactional-email HTTP implementation.
//!
//! # Responsibility
//! - Define the collaborator seam the booking service depends on.
//! - Implement it against an EmailJS-style JSON-over-HTTP send API.
//!
//! # Invariants
//! - Implementations report every failure as a typed error; there is no
//!   fire-and-forget path.

use super::config::MailerConfig;
use super::visit::VisitRequest;
use log::{error, info};
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MailerResult<T> = Result<T, MailerError>;

/// Send failure reported by a mailer implementation.
#[derive(Debug)]
pub enum MailerError {
    /// The request never completed (DNS, TLS, connect, timeout).
    Transport(minreq::Error),
    /// The service answered with a non-success status.
    Rejected { status: i32, body: String },
}

impl Display for MailerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "email send failed in transport: {err}"),
            Self::Rejected { status, body } => {
                write!(f, "email service rejected the send (status {status}): {body}")
            }
        }
    }
}

impl Error for MailerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Rejected { .. } => None,
        }
    }
}

impl From<minreq::Error> for MailerError {
    fn from(value: minreq::Error) -> Self {
        Self::Transport(value)
    }
}

/// Collaborator seam for sending one visit confirmation.
///
/// The booking service is generic over this trait; tests substitute a
/// recording fake the same way storage-backed services substitute in-memory
/// fixtures.
pub trait VisitMailer {
    fn send_confirmation(&self, request: &VisitRequest) -> MailerResult<()>;
}

impl<M: VisitMailer + ?Sized> VisitMailer for &M {
    fn send_confirmation(&self, request: &VisitRequest) -> MailerResult<()> {
        (**self).send_confirmation(request)
    }
}

/// Mailer backed by the transactional-email HTTP API.
pub struct HttpVisitMailer {
    config: MailerConfig,
}

impl HttpVisitMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    fn payload(&self, request: &VisitRequest) -> serde_json::Value {
        json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "recipient_email": request.recipient_email,
                "place_name": request.place_name,
                "visit_date": request.visit_date,
            },
        })
    }
}

impl VisitMailer for HttpVisitMailer {
    fn send_confirmation(&self, request: &VisitRequest) -> MailerResult<()> {
        let response = minreq::post(&self.config.endpoint)
            .with_header("Content-Type", "application/json")
            .with_body(self.payload(request).to_string())
            .send()?;

        if !(200..300).contains(&response.status_code) {
            let body = response.as_str().unwrap_or("<non-text body>").to_string();
            error!(
                "event=visit_email module=booking status=rejected http_status={} place={}",
                response.status_code, request.place_name
            );
            return Err(MailerError::Rejected {
                status: response.status_code,
                body,
            });
        }

        info!(
            "event=visit_email module=booking status=ok place={} date={}",
            request.place_name, request.visit_date
        );
        Ok(())
    }
}
