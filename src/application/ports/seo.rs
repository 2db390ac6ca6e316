// src/application/ports/seo.rs
use crate::application::{ApplicationResult, dto::SeoSettingsDto};
use async_trait::async_trait;

/// Site-wide SEO settings. The store owns the current snapshot; partial
/// updates are merged by the caller before `save`.
#[async_trait]
pub trait SeoSettingsStore: Send + Sync {
    async fn load(&self) -> ApplicationResult<SeoSettingsDto>;
    async fn save(&self, settings: SeoSettingsDto) -> ApplicationResult<()>;
}
