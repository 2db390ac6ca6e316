// src/presentation/http/controllers/analytics.rs
use crate::application::{
    commands::analytics::TrackViewCommand,
    dto::{ArticleStatsDto, DashboardStatsDto},
    queries::analytics::GetArticleStatsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleStatsParams {
    #[serde(default)]
    pub days: Option<i64>,
}

/// Query parameters rather than a body: views are tracked from a beacon-style
/// call the reader frontend fires on page load.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TrackViewParams {
    pub article_id: i64,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/analytics/dashboard",
    responses(
        (status = 200, description = "Aggregate stats scoped to the caller's own articles unless admin.", body = DashboardStatsDto)
    ),
    tag = "Analytics"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .analytics_queries
        .dashboard_stats(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/analytics/articles/{article_id}",
    params(
        ("article_id" = i64, Path, description = "Article id"),
        ArticleStatsParams
    ),
    responses(
        (status = 200, description = "Per-day view counts for one article.", body = ArticleStatsDto),
        (status = 403, description = "Caller neither owns the article nor is an admin."),
        (status = 404, description = "No such article.")
    ),
    tag = "Analytics"
)]
pub async fn article_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
    Query(params): Query<ArticleStatsParams>,
) -> HttpResult<Json<ArticleStatsDto>> {
    let query = GetArticleStatsQuery {
        article_id,
        days: params.days,
    };

    state
        .services
        .analytics_queries
        .article_stats(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/analytics/track-view",
    params(TrackViewParams),
    responses(
        (status = 200, description = "View recorded."),
        (status = 404, description = "No such article.")
    ),
    security([]),
    tag = "Analytics"
)]
pub async fn track_view(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TrackViewParams>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = TrackViewCommand {
        article_id: params.article_id,
        referrer: params.referrer,
        user_agent: params.user_agent,
    };

    state
        .services
        .analytics_commands
        .track_view(command)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "View tracked successfully" })))
}
