//! In-memory settings store for tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::settings::SiteSettings;
use crate::ports::SettingsStore;

/// In-memory [`SettingsStore`] implementation with the same lazy-seed
/// behavior as the Postgres adapter.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<Option<SiteSettings>>,
}

impl InMemorySettingsStore {
    /// Creates a store with no record; the first read seeds defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `settings`.
    pub fn with_settings(settings: SiteSettings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load_or_seed(&self) -> Result<SiteSettings, DomainError> {
        let mut guard = self
            .settings
            .write()
            .expect("InMemorySettingsStore: lock poisoned");
        Ok(guard.get_or_insert_with(SiteSettings::seed).clone())
    }

    async fn save(&self, settings: &SiteSettings) -> Result<(), DomainError> {
        let mut guard = self
            .settings
            .write()
            .expect("InMemorySettingsStore: lock poisoned");
        *guard = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_read_seeds_and_later_reads_reuse_it() {
        let store = InMemorySettingsStore::new();

        let first = store.load_or_seed().await.unwrap();
        assert_eq!(first.site_name, "Vintage Shop");

        let second = store.load_or_seed().await.unwrap();
        assert_eq!(second.created_at, first.created_at);
    }

    #[tokio::test]
    async fn save_replaces_the_record() {
        let store = InMemorySettingsStore::new();
        let mut settings = store.load_or_seed().await.unwrap();
        settings.site_name = "Boutiqa".to_string();

        store.save(&settings).await.unwrap();

        assert_eq!(store.load_or_seed().await.unwrap().site_name, "Boutiqa");
    }
}
