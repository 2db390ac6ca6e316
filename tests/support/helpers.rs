// tests/support/helpers.rs
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::util::ServiceExt as _;

use chronicle_core::application::dto::SeoSettingsDto;
use chronicle_core::application::ports::{
    SeoSettingsStorePort,
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use chronicle_core::application::services::ApplicationServices;
use chronicle_core::domain::{
    analytics::ViewStatsRepository,
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    slug::SlugExistence,
    user::UserRepository,
};
use chronicle_core::infrastructure::{
    bootstrap,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteUserRepository, SqliteViewStatsRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenManager},
    seo_store::InMemorySeoSettingsStore,
    time::SystemClock,
};
use chronicle_core::presentation::http::{routes::build_router, state::HttpState};

pub const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";
pub const TEST_SITE_URL: &str = "https://news.example.org";
const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// Full application state over a fresh in-memory database, seeded with the
/// default categories and an `admin` account.
pub async fn build_test_state() -> HttpState {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("sqlite options")
        .foreign_keys(true);
    // One connection, one database: a second pooled connection to
    // `:memory:` would see a different empty store.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory sqlite");
    chronicle_core::infrastructure::database::run_migrations(&pool)
        .await
        .expect("run migrations");

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let stats_repo: Arc<dyn ViewStatsRepository> =
        Arc::new(SqliteViewStatsRepository::new(pool.clone()));
    let article_slugs: Arc<dyn SlugExistence> =
        Arc::new(SqliteArticleReadRepository::new(pool.clone()));
    let category_slugs: Arc<dyn SlugExistence> = Arc::new(SqliteCategoryRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        TEST_JWT_SECRET,
        chrono::Duration::minutes(30),
        Arc::clone(&clock),
    ));
    let seo_store: Arc<SeoSettingsStorePort> = Arc::new(InMemorySeoSettingsStore::new(
        SeoSettingsDto::for_site(TEST_SITE_URL),
    ));

    bootstrap::seed_defaults(
        user_repo.as_ref(),
        category_repo.as_ref(),
        password_hasher.as_ref(),
        clock.as_ref(),
        Some(ADMIN_PASSWORD),
    )
    .await
    .expect("seed defaults");

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        category_repo,
        stats_repo,
        article_slugs,
        category_slugs,
        password_hasher,
        token_manager,
        seo_store,
        clock,
        TEST_SITE_URL.to_owned(),
    ));

    HttpState::new(services)
}

pub async fn make_test_router() -> Router {
    build_router(build_test_state().await)
}

/// Fire one request at the router. `token` adds a bearer header, `body`
/// sends JSON.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.clone().oneshot(request).await.expect("response")
}

pub async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    resp.into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_text(resp: axum::response::Response) -> String {
    String::from_utf8(body_bytes(resp).await).expect("utf-8 body")
}

pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let resp = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK, "login should succeed");

    let body = body_json(resp).await;
    body["token"]["access_token"]
        .as_str()
        .expect("access token in login response")
        .to_owned()
}

pub async fn login_admin(app: &Router) -> String {
    login(app, "admin", ADMIN_PASSWORD).await
}

/// Create a user through the admin API and return its id.
pub async fn create_user(
    app: &Router,
    admin_token: &str,
    username: &str,
    password: &str,
    role: &str,
) -> i64 {
    let resp = request(
        app,
        "POST",
        "/api/users",
        Some(admin_token),
        Some(json!({
            "username": username,
            "email": format!("{username}@example.org"),
            "password": password,
            "role": role,
            "profile": { "name": username }
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK, "user creation should succeed");

    let body = body_json(resp).await;
    body["id"].as_i64().expect("user id")
}

/// Create an article as the given principal and return the response body.
pub async fn create_article(app: &Router, token: &str, title: &str, category_id: i64) -> Value {
    let resp = request(
        app,
        "POST",
        "/api/articles",
        Some(token),
        Some(json!({
            "title": title,
            "content": "Body text long enough to be plausible.",
            "category_id": category_id,
        })),
    )
    .await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "article creation should succeed"
    );
    body_json(resp).await
}

/// Look up a seeded category id by slug through the public API.
pub async fn category_id_by_slug(app: &Router, slug: &str) -> i64 {
    let resp = request(app, "GET", "/api/categories", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    body.as_array()
        .expect("category array")
        .iter()
        .find(|category| category["slug"] == slug)
        .and_then(|category| category["id"].as_i64())
        .unwrap_or_else(|| panic!("category {slug} not seeded"))
}

/// Assert the response carries the standard error body with the expected
/// status and `error` label.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );

    let body = body_json(resp).await;
    assert_eq!(
        body["error"].as_str().unwrap_or(""),
        expected_error,
        "unexpected error label: {body}"
    );
    assert!(
        !body["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
}
