// src/application/commands/analytics/track.rs
use super::AnalyticsCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        analytics::ViewEvent,
        article::ArticleId,
    },
};

pub struct TrackViewCommand {
    pub article_id: i64,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl AnalyticsCommandService {
    /// Unauthenticated by design; the public site calls this on page load.
    /// Repeat views on the same day bump `views` while `unique_views` stays
    /// at one per day.
    pub async fn track_view(&self, command: TrackViewCommand) -> ApplicationResult<()> {
        let article_id = ArticleId::new(command.article_id)?;
        if self
            .article_read_repo
            .find_by_id(article_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::not_found("article not found"));
        }

        let event = ViewEvent {
            article_id,
            day: self.clock.now().date_naive(),
            referrer: command.referrer,
            user_agent: command.user_agent,
        };
        self.stats_repo.record_view(event).await?;
        self.article_write_repo.increment_views(article_id).await?;
        Ok(())
    }
}
