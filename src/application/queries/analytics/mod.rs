// src/application/queries/analytics/mod.rs
mod article_stats;
mod dashboard;
mod service;

pub use article_stats::GetArticleStatsQuery;
pub use service::AnalyticsQueryService;
