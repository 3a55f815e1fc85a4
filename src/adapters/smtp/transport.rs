//! SMTP mail transport backed by lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::settings::EmailNotifications;
use crate::ports::{MailError, MailTransport, OutgoingEmail};

/// [`MailTransport`] that speaks SMTP through [`lettre`].
///
/// The SMTP block lives in the mutable settings record, so every send
/// builds a fresh transport from the block it was handed. Port 465
/// gets implicit TLS, everything else STARTTLS.
pub struct LettreMailTransport;

impl LettreMailTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LettreMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls a required value out of the SMTP block.
fn required(value: Option<&str>, field: &str) -> Result<String, MailError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| MailError::misconfigured(format!("{field} is not set")))
}

#[async_trait]
impl MailTransport for LettreMailTransport {
    async fn send(
        &self,
        email: &OutgoingEmail,
        smtp: &EmailNotifications,
    ) -> Result<(), MailError> {
        let host = required(smtp.smtp_host.as_deref(), "smtp_host")?;
        let user = required(smtp.smtp_user.as_deref(), "smtp_user")?;
        let password = required(smtp.smtp_password.as_deref(), "smtp_password")?;

        let from: Mailbox = email.from.parse().map_err(MailError::delivery)?;
        let to: Mailbox = email.to.parse().map_err(MailError::delivery)?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(MailError::delivery)?;

        let builder = if smtp.uses_implicit_tls() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
        }
        .map_err(MailError::delivery)?;

        let transport = builder
            .port(smtp.smtp_port)
            .credentials(Credentials::new(user, password))
            .build();

        transport
            .send(message)
            .await
            .map_err(MailError::delivery)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "noreply@shop.dz".to_string(),
            to: "admin@shop.dz".to_string(),
            subject: "New Order".to_string(),
            body: "body".to_string(),
        }
    }

    fn configured_block() -> EmailNotifications {
        EmailNotifications {
            enabled: true,
            admin_email: Some("admin@shop.dz".to_string()),
            smtp_host: Some("smtp.shop.dz".to_string()),
            smtp_port: 587,
            smtp_user: Some("noreply@shop.dz".to_string()),
            smtp_password: Some("secret".to_string()),
        }
    }

    #[tokio::test]
    async fn missing_host_is_a_configuration_error() {
        let transport = LettreMailTransport::new();
        let smtp = EmailNotifications {
            smtp_host: None,
            ..configured_block()
        };

        let result = transport.send(&email(), &smtp).await;

        assert!(matches!(result, Err(MailError::Misconfigured(_))));
    }

    #[tokio::test]
    async fn blank_credentials_are_a_configuration_error() {
        let transport = LettreMailTransport::new();
        let smtp = EmailNotifications {
            smtp_password: Some("   ".to_string()),
            ..configured_block()
        };

        let result = transport.send(&email(), &smtp).await;

        assert!(matches!(result, Err(MailError::Misconfigured(_))));
    }

    #[tokio::test]
    async fn unparseable_recipient_fails_before_any_connection() {
        let transport = LettreMailTransport::new();
        let bad = OutgoingEmail {
            to: "not an address".to_string(),
            ..email()
        };

        let result = transport.send(&bad, &configured_block()).await;

        assert!(matches!(result, Err(MailError::Delivery(_))));
    }
}
