// src/infrastructure/seo_store.rs
use crate::application::{
    dto::SeoSettingsDto, error::ApplicationResult, ports::seo::SeoSettingsStore,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Settings live in process memory and reset to the seeded defaults on
/// restart. The sites running this have not needed them durable yet.
pub struct InMemorySeoSettingsStore {
    settings: RwLock<SeoSettingsDto>,
}

impl InMemorySeoSettingsStore {
    pub fn new(initial: SeoSettingsDto) -> Self {
        Self {
            settings: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl SeoSettingsStore for InMemorySeoSettingsStore {
    async fn load(&self) -> ApplicationResult<SeoSettingsDto> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: SeoSettingsDto) -> ApplicationResult<()> {
        *self.settings.write().await = settings;
        Ok(())
    }
}
