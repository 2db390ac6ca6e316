// src/application/commands/seo/service.rs
use std::sync::Arc;

use crate::application::ports::SeoSettingsStorePort;

pub struct SeoCommandService {
    pub(super) store: Arc<SeoSettingsStorePort>,
}

impl SeoCommandService {
    pub fn new(store: Arc<SeoSettingsStorePort>) -> Self {
        Self { store }
    }
}
