//! PostgreSQL implementation of SettingsStore.
//!
//! The settings table holds exactly one row, pinned to `id = 1` by a
//! check constraint. The first read seeds the storefront defaults; the
//! insert uses `ON CONFLICT DO NOTHING` so two concurrent first reads
//! both end up with the same persisted record.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::settings::{EmailNotifications, SiteSettings, SocialLinks};
use crate::ports::SettingsStore;

/// PostgreSQL implementation of SettingsStore.
#[derive(Clone)]
pub struct PostgresSettingsStore {
    pool: PgPool,
}

impl PostgresSettingsStore {
    /// Creates a new PostgresSettingsStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self) -> Result<Option<SiteSettings>, DomainError> {
        let row = sqlx::query_as::<_, SettingsRow>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM site_settings WHERE id = 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch settings: {}", e)))?;

        row.map(row_to_settings).transpose()
    }
}

const SETTINGS_COLUMNS: &str = "site_name, hero_image_desktop, hero_image_mobile, hero_title, \
     hero_subtitle, categories, footer_text, contact_email, contact_phone, facebook_url, \
     instagram_url, email_enabled, admin_email, smtp_host, smtp_port, smtp_user, smtp_password, \
     created_at, updated_at";

#[async_trait]
impl SettingsStore for PostgresSettingsStore {
    async fn load_or_seed(&self) -> Result<SiteSettings, DomainError> {
        if let Some(settings) = self.fetch().await? {
            return Ok(settings);
        }

        let seed = SiteSettings::seed();
        sqlx::query(&format!(
            "INSERT INTO site_settings (id, {SETTINGS_COLUMNS}) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19) \
             ON CONFLICT (id) DO NOTHING"
        ))
        .bind(&seed.site_name)
        .bind(&seed.hero_image_desktop)
        .bind(&seed.hero_image_mobile)
        .bind(&seed.hero_title)
        .bind(&seed.hero_subtitle)
        .bind(&seed.categories)
        .bind(&seed.footer_text)
        .bind(&seed.contact_email)
        .bind(&seed.contact_phone)
        .bind(&seed.social_links.facebook)
        .bind(&seed.social_links.instagram)
        .bind(seed.email_notifications.enabled)
        .bind(&seed.email_notifications.admin_email)
        .bind(&seed.email_notifications.smtp_host)
        .bind(i32::from(seed.email_notifications.smtp_port))
        .bind(&seed.email_notifications.smtp_user)
        .bind(&seed.email_notifications.smtp_password)
        .bind(seed.created_at.as_datetime())
        .bind(seed.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to seed settings: {}", e)))?;

        // Re-read rather than returning `seed` directly: if another
        // writer won the insert race, its row is the singleton.
        self.fetch().await?.ok_or_else(|| {
            DomainError::store("Settings row missing immediately after seeding".to_string())
        })
    }

    async fn save(&self, settings: &SiteSettings) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO site_settings (id, site_name, hero_image_desktop, hero_image_mobile, \
             hero_title, hero_subtitle, categories, footer_text, contact_email, contact_phone, \
             facebook_url, instagram_url, email_enabled, admin_email, smtp_host, smtp_port, \
             smtp_user, smtp_password, created_at, updated_at) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19) \
             ON CONFLICT (id) DO UPDATE SET \
               site_name = EXCLUDED.site_name, \
               hero_image_desktop = EXCLUDED.hero_image_desktop, \
               hero_image_mobile = EXCLUDED.hero_image_mobile, \
               hero_title = EXCLUDED.hero_title, \
               hero_subtitle = EXCLUDED.hero_subtitle, \
               categories = EXCLUDED.categories, \
               footer_text = EXCLUDED.footer_text, \
               contact_email = EXCLUDED.contact_email, \
               contact_phone = EXCLUDED.contact_phone, \
               facebook_url = EXCLUDED.facebook_url, \
               instagram_url = EXCLUDED.instagram_url, \
               email_enabled = EXCLUDED.email_enabled, \
               admin_email = EXCLUDED.admin_email, \
               smtp_host = EXCLUDED.smtp_host, \
               smtp_port = EXCLUDED.smtp_port, \
               smtp_user = EXCLUDED.smtp_user, \
               smtp_password = EXCLUDED.smtp_password, \
               updated_at = EXCLUDED.updated_at",
        )
        .bind(&settings.site_name)
        .bind(&settings.hero_image_desktop)
        .bind(&settings.hero_image_mobile)
        .bind(&settings.hero_title)
        .bind(&settings.hero_subtitle)
        .bind(&settings.categories)
        .bind(&settings.footer_text)
        .bind(&settings.contact_email)
        .bind(&settings.contact_phone)
        .bind(&settings.social_links.facebook)
        .bind(&settings.social_links.instagram)
        .bind(settings.email_notifications.enabled)
        .bind(&settings.email_notifications.admin_email)
        .bind(&settings.email_notifications.smtp_host)
        .bind(i32::from(settings.email_notifications.smtp_port))
        .bind(&settings.email_notifications.smtp_user)
        .bind(&settings.email_notifications.smtp_password)
        .bind(settings.created_at.as_datetime())
        .bind(settings.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to save settings: {}", e)))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

/// Database row for the settings singleton.
#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    site_name: String,
    hero_image_desktop: Option<String>,
    hero_image_mobile: Option<String>,
    hero_title: String,
    hero_subtitle: String,
    categories: Vec<String>,
    footer_text: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    facebook_url: Option<String>,
    instagram_url: Option<String>,
    email_enabled: bool,
    admin_email: Option<String>,
    smtp_host: Option<String>,
    smtp_port: i32,
    smtp_user: Option<String>,
    smtp_password: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_settings(row: SettingsRow) -> Result<SiteSettings, DomainError> {
    let smtp_port = u16::try_from(row.smtp_port)
        .map_err(|_| DomainError::store(format!("Invalid settings row: smtp_port {}", row.smtp_port)))?;

    Ok(SiteSettings {
        site_name: row.site_name,
        hero_image_desktop: row.hero_image_desktop,
        hero_image_mobile: row.hero_image_mobile,
        hero_title: row.hero_title,
        hero_subtitle: row.hero_subtitle,
        categories: row.categories,
        footer_text: row.footer_text,
        contact_email: row.contact_email,
        contact_phone: row.contact_phone,
        social_links: SocialLinks {
            facebook: row.facebook_url,
            instagram: row.instagram_url,
        },
        email_notifications: EmailNotifications {
            enabled: row.email_enabled,
            admin_email: row.admin_email,
            smtp_host: row.smtp_host,
            smtp_port,
            smtp_user: row.smtp_user,
            smtp_password: row.smtp_password,
        },
        created_at: Timestamp::from_datetime(row.created_at),
        updated_at: Timestamp::from_datetime(row.updated_at),
    })
}
