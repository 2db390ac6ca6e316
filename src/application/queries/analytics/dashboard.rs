// src/application/queries/analytics/dashboard.rs
use super::AnalyticsQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, DailyViewsDto, DashboardStatsDto, TopArticleDto},
        error::ApplicationResult,
    },
    domain::{article::ArticleStatus, user::Role},
};
use chrono::Duration;

const TOP_ARTICLES: u32 = 5;
const DAILY_WINDOW_DAYS: i64 = 30;

impl AnalyticsQueryService {
    /// Admins see site-wide numbers; everyone else sees only their own
    /// articles' figures.
    pub async fn dashboard_stats(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<DashboardStatsDto> {
        let author_scope = if actor.role == Role::Admin {
            None
        } else {
            Some(actor.id)
        };

        let today = self.clock.now().date_naive();
        let week_ago = today - Duration::days(7);
        let month_ago = today - Duration::days(DAILY_WINDOW_DAYS);

        let total_articles = self.article_read_repo.count(author_scope, None).await?;
        let published_articles = self
            .article_read_repo
            .count(author_scope, Some(ArticleStatus::Published))
            .await?;
        let draft_articles = self
            .article_read_repo
            .count(author_scope, Some(ArticleStatus::Draft))
            .await?;

        let total_views = self.stats_repo.total_views(author_scope).await?;
        let week_views = self.stats_repo.views_since(week_ago, author_scope).await?;
        let month_views = self.stats_repo.views_since(month_ago, author_scope).await?;

        let top_articles = self
            .article_read_repo
            .top_by_views(author_scope, TOP_ARTICLES)
            .await?
            .into_iter()
            .map(|article| TopArticleDto {
                id: article.id.into(),
                title: article.title.into_inner(),
                views: article.views,
                published_at: article.published_at,
            })
            .collect();

        let daily_views = self
            .stats_repo
            .daily_views(month_ago, author_scope)
            .await?
            .into_iter()
            .map(|day| DailyViewsDto {
                date: day.day,
                views: day.views,
            })
            .collect();

        Ok(DashboardStatsDto {
            total_articles,
            published_articles,
            draft_articles,
            total_views,
            week_views,
            month_views,
            top_articles,
            daily_views,
        })
    }
}
