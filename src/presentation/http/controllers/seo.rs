// src/presentation/http/controllers/seo.rs
use crate::application::{
    dto::{MetaTagsDto, SeoSettingsDto, SeoSettingsUpdate},
    queries::seo::GetMetaTagsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct MetaTagsParams {
    #[serde(default)]
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/seo/settings",
    responses(
        (status = 200, description = "Site-wide SEO settings.", body = SeoSettingsDto),
        (status = 403, description = "Caller is not an admin.")
    ),
    tag = "SEO"
)]
pub async fn get_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SeoSettingsDto>> {
    state
        .services
        .seo_queries
        .get_settings(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/seo/settings",
    request_body = SeoSettingsUpdate,
    responses(
        (status = 200, description = "Settings after the update.", body = SeoSettingsDto),
        (status = 403, description = "Caller is not an admin.")
    ),
    tag = "SEO"
)]
pub async fn update_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SeoSettingsUpdate>,
) -> HttpResult<Json<SeoSettingsDto>> {
    state
        .services
        .seo_commands
        .update_settings(&user, payload)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/seo/meta-tags",
    params(MetaTagsParams),
    responses(
        (status = 200, description = "Meta tags for the named page.", body = MetaTagsDto)
    ),
    security([]),
    tag = "SEO"
)]
pub async fn meta_tags(
    Extension(state): Extension<HttpState>,
    Query(params): Query<MetaTagsParams>,
) -> HttpResult<Json<MetaTagsDto>> {
    state
        .services
        .seo_queries
        .meta_tags(GetMetaTagsQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/seo/sitemap.xml",
    responses((status = 200, description = "Sitemap of published articles and categories.", content_type = "application/xml")),
    security([]),
    tag = "SEO"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let xml = state
        .services
        .seo_queries
        .sitemap_xml()
        .await
        .into_http()?;

    Ok(xml_response(xml, SITEMAP_MAX_AGE))
}

#[utoipa::path(
    get,
    path = "/seo/llms-sitemap.xml",
    responses((status = 200, description = "Sitemap variant carrying AI-training metadata per entry.", content_type = "application/xml")),
    security([]),
    tag = "SEO"
)]
pub async fn llms_sitemap(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let xml = state
        .services
        .seo_queries
        .llms_sitemap_xml()
        .await
        .into_http()?;

    Ok(xml_response(xml, SITEMAP_MAX_AGE))
}

#[utoipa::path(
    get,
    path = "/seo/llms.txt",
    responses((status = 200, description = "Crawler guidance for language models.", content_type = "text/plain")),
    security([]),
    tag = "SEO"
)]
pub async fn llms_txt(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let text = state.services.seo_queries.llms_txt().await.into_http()?;

    Ok(text_response(text, SITEMAP_MAX_AGE))
}

#[utoipa::path(
    get,
    path = "/seo/robots.txt",
    responses((status = 200, description = "Crawler rules.", content_type = "text/plain")),
    security([]),
    tag = "SEO"
)]
pub async fn robots_txt(Extension(state): Extension<HttpState>) -> Response {
    text_response(state.services.seo_queries.robots_txt(), ROBOTS_MAX_AGE)
}

const SITEMAP_MAX_AGE: u32 = 3600;
const ROBOTS_MAX_AGE: u32 = 86400;

fn xml_response(body: String, max_age: u32) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "application/xml; charset=utf-8".to_owned(),
            ),
            (header::CACHE_CONTROL, format!("public, max-age={max_age}")),
        ],
        body,
    )
        .into_response()
}

fn text_response(body: String, max_age: u32) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
            (header::CACHE_CONTROL, format!("public, max-age={max_age}")),
        ],
        body,
    )
        .into_response()
}
