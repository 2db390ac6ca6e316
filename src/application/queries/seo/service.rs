use std::sync::Arc;

use crate::application::ports::{SeoSettingsStorePort, time::Clock};
use crate::domain::{
    article::ArticleReadRepository, category::CategoryRepository, user::UserRepository,
};

/// Publication name used in generated news markup.
pub(super) const SITE_NAME: &str = "Chronicle";

pub struct SeoQueryService {
    pub(super) store: Arc<SeoSettingsStorePort>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) site_url: String,
}

impl SeoQueryService {
    pub fn new(
        store: Arc<SeoSettingsStorePort>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        site_url: String,
    ) -> Self {
        let site_url = site_url.trim_end_matches('/').to_owned();
        Self {
            store,
            article_read_repo,
            category_repo,
            user_repo,
            clock,
            site_url,
        }
    }
}
