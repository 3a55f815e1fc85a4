//! GetSettingsHandler - fetch the settings singleton, creating the
//! default record on first read.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::settings::SiteSettings;
use crate::ports::SettingsStore;

pub struct GetSettingsHandler {
    store: Arc<dyn SettingsStore>,
}

impl GetSettingsHandler {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<SiteSettings, DomainError> {
        self.store.load_or_seed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySettingsStore;

    #[tokio::test]
    async fn first_read_seeds_the_defaults() {
        let handler = GetSettingsHandler::new(Arc::new(InMemorySettingsStore::new()));

        let settings = handler.handle().await.unwrap();

        assert_eq!(settings.site_name, "Vintage Shop");
    }

    #[tokio::test]
    async fn existing_record_is_returned_as_is() {
        let mut seeded = SiteSettings::seed();
        seeded.site_name = "Boutiqa".to_string();
        let handler =
            GetSettingsHandler::new(Arc::new(InMemorySettingsStore::with_settings(seeded)));

        let settings = handler.handle().await.unwrap();

        assert_eq!(settings.site_name, "Boutiqa");
    }
}
