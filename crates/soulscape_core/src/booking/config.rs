//! Mailer configuration from environment variables.
//!
//! # Responsibility
//! - Resolve the transactional-email endpoint and credentials.
//! - Fall back to documented defaults loudly, never silently.

use log::info;
use std::env;

const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_soulscape";
const DEFAULT_TEMPLATE_ID: &str = "template_visit";
const DEFAULT_PUBLIC_KEY: &str = "public_demo_key";

/// Connection settings for the transactional-email collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailerConfig {
    /// Loads settings from the environment, defaulting per variable.
    ///
    /// The defaults point at the public endpoint with placeholder ids, so an
    /// unconfigured run fails at the collaborator with a visible message
    /// rather than misconfiguring quietly.
    pub fn load() -> Self {
        Self {
            endpoint: var_or("SOULSCAPE_MAIL_ENDPOINT", DEFAULT_ENDPOINT),
            service_id: var_or("SOULSCAPE_MAIL_SERVICE", DEFAULT_SERVICE_ID),
            template_id: var_or("SOULSCAPE_MAIL_TEMPLATE", DEFAULT_TEMPLATE_ID),
            public_key: var_or("SOULSCAPE_MAIL_KEY", DEFAULT_PUBLIC_KEY),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("event=mailer_config module=booking status=default key={key}");
        default.to_string()
    })
}
