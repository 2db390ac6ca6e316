// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{
    article::ArticleReadRepository, category::CategoryRepository, slug::SlugAssigner,
};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_assigner: Arc<SlugAssigner>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        slug_assigner: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            article_read_repo,
            slug_assigner,
            clock,
        }
    }
}
