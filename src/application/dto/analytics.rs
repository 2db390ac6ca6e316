// src/application/dto/analytics.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyViewsDto {
    pub date: NaiveDate,
    pub views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDailyViewsDto {
    pub date: NaiveDate,
    pub views: i64,
    pub unique_views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopArticleDto {
    pub id: i64,
    pub title: String,
    pub views: i64,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_articles: u64,
    pub published_articles: u64,
    pub draft_articles: u64,
    pub total_views: i64,
    pub week_views: i64,
    pub month_views: i64,
    pub top_articles: Vec<TopArticleDto>,
    pub daily_views: Vec<DailyViewsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleStatsDto {
    pub article_id: i64,
    pub article_title: String,
    pub total_views: i64,
    pub total_unique_views: i64,
    pub period_days: u32,
    pub daily_stats: Vec<ArticleDailyViewsDto>,
}
