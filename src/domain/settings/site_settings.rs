//! Site-wide settings singleton.
//!
//! A single record drives the storefront chrome (hero, categories,
//! contact details) and the notification mail transport. It is created
//! lazily with defaults on first read and mutated only by admin update.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, Timestamp};

/// Social profile links shown in the storefront footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

/// SMTP notification preferences embedded in the settings record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailNotifications {
    /// Master switch; mail is never sent while this is off.
    pub enabled: bool,
    /// Recipient for new-order notifications.
    pub admin_email: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailNotifications {
    /// Default SMTP submission port.
    pub const DEFAULT_SMTP_PORT: u16 = 587;

    /// Implicit TLS is required on the SMTPS port, STARTTLS elsewhere.
    pub fn uses_implicit_tls(&self) -> bool {
        self.smtp_port == 465
    }

    /// Returns the admin recipient when it is actually usable.
    pub fn admin_recipient(&self) -> Option<&str> {
        self.admin_email.as_deref().filter(|e| !e.trim().is_empty())
    }
}

impl Default for EmailNotifications {
    fn default() -> Self {
        Self {
            enabled: false,
            admin_email: None,
            smtp_host: None,
            smtp_port: Self::DEFAULT_SMTP_PORT,
            smtp_user: None,
            smtp_password: None,
        }
    }
}

// Manual Debug keeps the SMTP password out of logs.
impl fmt::Debug for EmailNotifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailNotifications")
            .field("enabled", &self.enabled)
            .field("admin_email", &self.admin_email)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// The storefront's single settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub hero_image_desktop: Option<String>,
    pub hero_image_mobile: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub categories: Vec<String>,
    pub footer_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub social_links: SocialLinks,
    pub email_notifications: EmailNotifications,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SiteSettings {
    /// The record created on first read when none exists yet.
    pub fn seed() -> Self {
        let now = Timestamp::now();
        Self {
            site_name: "Vintage Shop".to_string(),
            hero_image_desktop: Some("/placeholder.svg?height=400&width=800".to_string()),
            hero_image_mobile: Some("/placeholder.svg?height=600&width=400".to_string()),
            hero_title: "Welcome to our Vintage Shop".to_string(),
            hero_subtitle: "Discover timeless fashion pieces".to_string(),
            categories: vec![
                "Shirts".to_string(),
                "Pants".to_string(),
                "Accessories".to_string(),
            ],
            footer_text: Some("Find unique vintage clothing".to_string()),
            contact_email: Some("contact@vintageshop.com".to_string()),
            contact_phone: Some("123-456-7890".to_string()),
            social_links: SocialLinks {
                facebook: Some("https://facebook.com".to_string()),
                instagram: Some("https://instagram.com".to_string()),
            },
            email_notifications: EmailNotifications::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks the fields the storefront cannot render without.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when site name, hero title, or hero subtitle
    ///   is blank
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.site_name.trim().is_empty() {
            return Err(DomainError::validation("site_name", "Site name is required"));
        }
        if self.hero_title.trim().is_empty() {
            return Err(DomainError::validation(
                "hero_title",
                "Hero title is required",
            ));
        }
        if self.hero_subtitle.trim().is_empty() {
            return Err(DomainError::validation(
                "hero_subtitle",
                "Hero subtitle is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_storefront_defaults() {
        let settings = SiteSettings::seed();
        assert_eq!(settings.site_name, "Vintage Shop");
        assert_eq!(settings.hero_title, "Welcome to our Vintage Shop");
        assert_eq!(
            settings.categories,
            vec!["Shirts", "Pants", "Accessories"]
        );
        assert!(!settings.email_notifications.enabled);
        assert_eq!(
            settings.email_notifications.smtp_port,
            EmailNotifications::DEFAULT_SMTP_PORT
        );
    }

    #[test]
    fn seed_passes_validation() {
        assert!(SiteSettings::seed().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let mut settings = SiteSettings::seed();
        settings.site_name = "  ".to_string();
        assert!(settings.validate().is_err());

        let mut settings = SiteSettings::seed();
        settings.hero_title = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn implicit_tls_only_on_smtps_port() {
        let mut notifications = EmailNotifications::default();
        assert!(!notifications.uses_implicit_tls());

        notifications.smtp_port = 465;
        assert!(notifications.uses_implicit_tls());
    }

    #[test]
    fn admin_recipient_ignores_blank_addresses() {
        let mut notifications = EmailNotifications::default();
        assert_eq!(notifications.admin_recipient(), None);

        notifications.admin_email = Some("   ".to_string());
        assert_eq!(notifications.admin_recipient(), None);

        notifications.admin_email = Some("admin@shop.dz".to_string());
        assert_eq!(notifications.admin_recipient(), Some("admin@shop.dz"));
    }

    #[test]
    fn debug_output_redacts_smtp_password() {
        let notifications = EmailNotifications {
            smtp_password: Some("hunter2".to_string()),
            ..EmailNotifications::default()
        };
        let debug = format!("{:?}", notifications);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }
}
