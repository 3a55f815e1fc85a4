//! UpdateSettingsHandler - Admin command to change the settings
//! singleton.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::settings::{EmailNotifications, SiteSettings, SocialLinks};
use crate::ports::SettingsStore;

/// Partial update over the settings record. `None` leaves a field
/// unchanged; list and block fields are replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsCommand {
    pub site_name: Option<String>,
    pub hero_image_desktop: Option<String>,
    pub hero_image_mobile: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub categories: Option<Vec<String>>,
    pub footer_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub email_notifications: Option<EmailNotifications>,
}

pub struct UpdateSettingsHandler {
    store: Arc<dyn SettingsStore>,
}

impl UpdateSettingsHandler {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateSettingsCommand) -> Result<SiteSettings, DomainError> {
        // 1. Load (or seed) the current record.
        let mut settings = self.store.load_or_seed().await?;

        // 2. Merge the provided fields.
        if let Some(site_name) = cmd.site_name {
            settings.site_name = site_name;
        }
        if let Some(url) = cmd.hero_image_desktop {
            settings.hero_image_desktop = Some(url);
        }
        if let Some(url) = cmd.hero_image_mobile {
            settings.hero_image_mobile = Some(url);
        }
        if let Some(title) = cmd.hero_title {
            settings.hero_title = title;
        }
        if let Some(subtitle) = cmd.hero_subtitle {
            settings.hero_subtitle = subtitle;
        }
        if let Some(categories) = cmd.categories {
            settings.categories = categories;
        }
        if let Some(footer) = cmd.footer_text {
            settings.footer_text = Some(footer);
        }
        if let Some(email) = cmd.contact_email {
            settings.contact_email = Some(email);
        }
        if let Some(phone) = cmd.contact_phone {
            settings.contact_phone = Some(phone);
        }
        if let Some(links) = cmd.social_links {
            settings.social_links = links;
        }
        if let Some(notifications) = cmd.email_notifications {
            settings.email_notifications = notifications;
        }

        // 3. Validate and persist.
        settings.validate()?;
        settings.updated_at = Timestamp::now();
        self.store.save(&settings).await?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySettingsStore;

    #[tokio::test]
    async fn updates_only_the_provided_fields() {
        let store = Arc::new(InMemorySettingsStore::new());
        let handler = UpdateSettingsHandler::new(store.clone());

        let updated = handler
            .handle(UpdateSettingsCommand {
                site_name: Some("Boutiqa".to_string()),
                categories: Some(vec!["Jackets".to_string()]),
                ..UpdateSettingsCommand::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.site_name, "Boutiqa");
        assert_eq!(updated.categories, vec!["Jackets"]);
        // Untouched fields keep their seeded values.
        assert_eq!(updated.hero_title, "Welcome to our Vintage Shop");

        let persisted = store.load_or_seed().await.unwrap();
        assert_eq!(persisted.site_name, "Boutiqa");
    }

    #[tokio::test]
    async fn enabling_notifications_stores_the_smtp_block() {
        let handler = UpdateSettingsHandler::new(Arc::new(InMemorySettingsStore::new()));

        let updated = handler
            .handle(UpdateSettingsCommand {
                email_notifications: Some(EmailNotifications {
                    enabled: true,
                    admin_email: Some("admin@shop.dz".to_string()),
                    smtp_host: Some("smtp.shop.dz".to_string()),
                    smtp_port: 465,
                    smtp_user: Some("noreply@shop.dz".to_string()),
                    smtp_password: Some("secret".to_string()),
                }),
                ..UpdateSettingsCommand::default()
            })
            .await
            .unwrap();

        assert!(updated.email_notifications.enabled);
        assert!(updated.email_notifications.uses_implicit_tls());
    }

    #[tokio::test]
    async fn blank_site_name_is_rejected_and_not_saved() {
        let store = Arc::new(InMemorySettingsStore::new());
        let handler = UpdateSettingsHandler::new(store.clone());

        let result = handler
            .handle(UpdateSettingsCommand {
                site_name: Some("   ".to_string()),
                ..UpdateSettingsCommand::default()
            })
            .await;

        assert!(result.is_err());
        let persisted = store.load_or_seed().await.unwrap();
        assert_eq!(persisted.site_name, "Vintage Shop");
    }

    #[tokio::test]
    async fn update_bumps_the_timestamp() {
        let store = Arc::new(InMemorySettingsStore::new());
        let before = store.load_or_seed().await.unwrap();
        let handler = UpdateSettingsHandler::new(store);

        let updated = handler
            .handle(UpdateSettingsCommand {
                footer_text: Some("Slow fashion since 2019".to_string()),
                ..UpdateSettingsCommand::default()
            })
            .await
            .unwrap();

        assert!(updated.updated_at >= before.updated_at);
    }
}
