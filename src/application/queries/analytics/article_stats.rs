// src/application/queries/analytics/article_stats.rs
use super::AnalyticsQueryService;
use crate::{
    application::{
        dto::{ArticleDailyViewsDto, ArticleStatsDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_owner_or_admin,
    },
    domain::article::ArticleId,
};
use chrono::Duration;

const DEFAULT_PERIOD_DAYS: i64 = 30;
const MAX_PERIOD_DAYS: i64 = 365;

pub struct GetArticleStatsQuery {
    pub article_id: i64,
    pub days: Option<i64>,
}

impl AnalyticsQueryService {
    pub async fn article_stats(
        &self,
        actor: &AuthenticatedUser,
        query: GetArticleStatsQuery,
    ) -> ApplicationResult<ArticleStatsDto> {
        let id = ArticleId::new(query.article_id)?;
        let article = self
            .article_read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        ensure_owner_or_admin(actor, article.author_id)?;

        let days = query
            .days
            .unwrap_or(DEFAULT_PERIOD_DAYS)
            .clamp(1, MAX_PERIOD_DAYS);
        let since = self.clock.now().date_naive() - Duration::days(days);

        let totals = self.stats_repo.article_totals(id, since).await?;
        let daily_stats = self
            .stats_repo
            .article_daily_views(id, since)
            .await?
            .into_iter()
            .map(|day| ArticleDailyViewsDto {
                date: day.day,
                views: day.views,
                unique_views: day.unique_views,
            })
            .collect();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(ArticleStatsDto {
            article_id: id.into(),
            article_title: article.title.into_inner(),
            total_views: totals.views,
            total_unique_views: totals.unique_views,
            period_days: days as u32,
            daily_stats,
        })
    }
}
