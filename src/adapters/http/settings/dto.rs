//! HTTP DTOs for site settings.
//!
//! The response view deliberately has no `smtpPassword` field; the
//! stored password never leaves the server, not even for admins.

use serde::{Deserialize, Serialize};

use crate::domain::settings::{EmailNotifications, SiteSettings, SocialLinks};

/// Social profile links block, identical in requests and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinksDto {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

impl From<SocialLinksDto> for SocialLinks {
    fn from(dto: SocialLinksDto) -> Self {
        Self {
            facebook: dto.facebook,
            instagram: dto.instagram,
        }
    }
}

/// Notification block as submitted by the admin dashboard.
///
/// The block replaces the stored one wholesale, so the form resubmits
/// the SMTP password along with the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationsRequest {
    #[serde(default)]
    pub enabled: bool,
    pub admin_email: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl From<EmailNotificationsRequest> for EmailNotifications {
    fn from(request: EmailNotificationsRequest) -> Self {
        Self {
            enabled: request.enabled,
            admin_email: request.admin_email,
            smtp_host: request.smtp_host,
            smtp_port: request
                .smtp_port
                .unwrap_or(EmailNotifications::DEFAULT_SMTP_PORT),
            smtp_user: request.smtp_user,
            smtp_password: request.smtp_password,
        }
    }
}

/// Notification block as returned to clients, password omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationsView {
    pub enabled: bool,
    pub admin_email: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
}

/// Body of PUT /api/settings. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub site_name: Option<String>,
    pub hero_image_desktop: Option<String>,
    pub hero_image_mobile: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub categories: Option<Vec<String>>,
    pub footer_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub social_links: Option<SocialLinksDto>,
    pub email_notifications: Option<EmailNotificationsRequest>,
}

/// The settings record as returned by GET and PUT.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub site_name: String,
    pub hero_image_desktop: Option<String>,
    pub hero_image_mobile: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub categories: Vec<String>,
    pub footer_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub social_links: SocialLinksDto,
    pub email_notifications: EmailNotificationsView,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&SiteSettings> for SettingsResponse {
    fn from(settings: &SiteSettings) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            hero_image_desktop: settings.hero_image_desktop.clone(),
            hero_image_mobile: settings.hero_image_mobile.clone(),
            hero_title: settings.hero_title.clone(),
            hero_subtitle: settings.hero_subtitle.clone(),
            categories: settings.categories.clone(),
            footer_text: settings.footer_text.clone(),
            contact_email: settings.contact_email.clone(),
            contact_phone: settings.contact_phone.clone(),
            social_links: SocialLinksDto {
                facebook: settings.social_links.facebook.clone(),
                instagram: settings.social_links.instagram.clone(),
            },
            email_notifications: EmailNotificationsView {
                enabled: settings.email_notifications.enabled,
                admin_email: settings.email_notifications.admin_email.clone(),
                smtp_host: settings.email_notifications.smtp_host.clone(),
                smtp_port: settings.email_notifications.smtp_port,
                smtp_user: settings.email_notifications.smtp_user.clone(),
            },
            created_at: settings.created_at.to_rfc3339(),
            updated_at: settings.updated_at.to_rfc3339(),
        }
    }
}
