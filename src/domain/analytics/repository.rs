// src/domain/analytics/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::NaiveDate;

/// One recorded page view, bucketed per article per day.
#[derive(Debug, Clone)]
pub struct ViewEvent {
    pub article_id: ArticleId,
    pub day: NaiveDate,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyViews {
    pub day: NaiveDate,
    pub views: i64,
    pub unique_views: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewTotals {
    pub views: i64,
    pub unique_views: i64,
}

/// Daily view aggregates. `author_id` filters restrict the numbers to
/// articles owned by that user; `None` covers the whole site.
#[async_trait]
pub trait ViewStatsRepository: Send + Sync {
    async fn record_view(&self, event: ViewEvent) -> DomainResult<()>;

    async fn total_views(&self, author_id: Option<UserId>) -> DomainResult<i64>;

    async fn views_since(&self, since: NaiveDate, author_id: Option<UserId>)
    -> DomainResult<i64>;

    async fn daily_views(
        &self,
        since: NaiveDate,
        author_id: Option<UserId>,
    ) -> DomainResult<Vec<DailyViews>>;

    async fn article_totals(
        &self,
        article_id: ArticleId,
        since: NaiveDate,
    ) -> DomainResult<ViewTotals>;

    async fn article_daily_views(
        &self,
        article_id: ArticleId,
        since: NaiveDate,
    ) -> DomainResult<Vec<DailyViews>>;
}
