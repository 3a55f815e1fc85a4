//! Mail transport port for outbound notification email.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::settings::EmailNotifications;

/// A fully composed plain-text email ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Failures dispatching mail.
///
/// The notification gateway logs these and swallows them; mail must
/// never affect the operation that triggered it.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    /// The SMTP block lacks a host or credentials.
    #[error("smtp configuration incomplete: {0}")]
    Misconfigured(String),

    /// Connecting to or speaking SMTP with the server failed.
    #[error("smtp delivery failed: {0}")]
    Delivery(String),
}

impl MailError {
    /// Creates a misconfiguration error.
    pub fn misconfigured(detail: impl Into<String>) -> Self {
        MailError::Misconfigured(detail.into())
    }

    /// Creates a delivery error from any displayable cause.
    pub fn delivery(cause: impl std::fmt::Display) -> Self {
        MailError::Delivery(cause.to_string())
    }
}

/// Port for sending one email over the SMTP settings stored in the
/// site configuration.
///
/// A fresh session is opened per send; the settings record can change
/// between calls and implementations must not cache connections.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send the email using the given SMTP block.
    async fn send(&self, email: &OutgoingEmail, smtp: &EmailNotifications)
        -> Result<(), MailError>;
}
