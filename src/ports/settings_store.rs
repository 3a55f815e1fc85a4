//! Settings store port for the site-wide singleton record.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::settings::SiteSettings;

/// Persistence port for the single [`SiteSettings`] record.
///
/// There is no global cached settings object; callers fetch through
/// this port each time they need the current record.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the settings record, creating and persisting the seed
    /// defaults when none exists yet.
    ///
    /// # Errors
    ///
    /// - `StoreError` on persistence failure
    async fn load_or_seed(&self) -> Result<SiteSettings, DomainError>;

    /// Persist the given record as the singleton (upsert).
    async fn save(&self, settings: &SiteSettings) -> Result<(), DomainError>;
}
