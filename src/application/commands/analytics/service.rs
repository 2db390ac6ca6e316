// src/application/commands/analytics/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{
    analytics::ViewStatsRepository,
    article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct AnalyticsCommandService {
    pub(super) stats_repo: Arc<dyn ViewStatsRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AnalyticsCommandService {
    pub fn new(
        stats_repo: Arc<dyn ViewStatsRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stats_repo,
            article_read_repo,
            article_write_repo,
            clock,
        }
    }
}
