// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, SetPublishStateCommand, UpdateArticleCommand,
    },
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListArticlesParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub status: Option<ArticleStatus>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ListArticlesParams),
    responses(
        (status = 200, description = "Articles visible to the caller, newest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListArticlesParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = ListArticlesQuery {
        skip: params.skip,
        limit: params.limit,
        status: params.status,
        category_id: params.category_id,
        author_id: params.author_id,
        search: params.search,
    };

    state
        .services
        .article_queries
        .list_articles(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The requested article.", body = ArticleDto),
        (status = 403, description = "Caller neither owns the article nor is an admin."),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(&user, GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The requested article.", body = ArticleDto),
        (status = 404, description = "No published article under this slug.")
    ),
    security([]),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = ArticleDto),
        (status = 400, description = "Title yields an empty slug, or a field fails validation."),
        (status = 409, description = "Slug taken twice in a row.")
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        category_id: payload.category_id,
        tags: payload.tags,
        featured_image: payload.featured_image,
        status: payload.status.unwrap_or(ArticleStatus::Draft),
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 403, description = "Caller neither owns the article nor is an admin."),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        category_id: payload.category_id,
        tags: payload.tags,
        featured_image: payload.featured_image,
        status: payload.status,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article removed."),
        (status = 403, description = "Caller may not delete this article."),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "Article deleted successfully" })))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is now live."),
        (status = 403, description = "Caller is not an editor or admin."),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .set_publish_state(&user, SetPublishStateCommand { id, publish: true })
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "Article published successfully" })))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/unpublish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is back to draft."),
        (status = 403, description = "Caller is not an editor or admin."),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles"
)]
pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .set_publish_state(
            &user,
            SetPublishStateCommand {
                id,
                publish: false,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "Article unpublished successfully" })))
}
