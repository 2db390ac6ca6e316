// src/main.rs
use chronicle_core::application::{
    dto::SeoSettingsDto,
    ports::{
        SeoSettingsStorePort,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use chronicle_core::config::AppConfig;
use chronicle_core::domain::{
    analytics::ViewStatsRepository,
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    slug::SlugExistence,
    user::UserRepository,
};
use chronicle_core::infrastructure::{
    bootstrap, database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteUserRepository, SqliteViewStatsRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenManager},
    seo_store::InMemorySeoSettingsStore,
    time::SystemClock,
};
use chronicle_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap_server().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap_server() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

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
    let token_ttl = chrono::Duration::from_std(config.token_ttl())?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        token_ttl,
        Arc::clone(&clock),
    ));
    let seo_store: Arc<SeoSettingsStorePort> = Arc::new(InMemorySeoSettingsStore::new(
        SeoSettingsDto::for_site(config.site_url()),
    ));

    bootstrap::seed_defaults(
        user_repo.as_ref(),
        category_repo.as_ref(),
        password_hasher.as_ref(),
        clock.as_ref(),
        config.bootstrap_admin_password(),
    )
    .await?;

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
        config.site_url().to_owned(),
    ));

    let state = HttpState::new(services);

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
