use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{analytics::ViewStatsRepository, article::ArticleReadRepository};

pub struct AnalyticsQueryService {
    pub(super) stats_repo: Arc<dyn ViewStatsRepository>,
    pub(super) article_read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AnalyticsQueryService {
    pub fn new(
        stats_repo: Arc<dyn ViewStatsRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stats_repo,
            article_read_repo,
            clock,
        }
    }
}
