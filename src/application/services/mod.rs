// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            analytics::AnalyticsCommandService, articles::ArticleCommandService,
            categories::CategoryCommandService, seo::SeoCommandService, users::UserCommandService,
        },
        dto::{ArticleAssembler, AuthenticatedUser},
        error::ApplicationResult,
        identity::IdentityService,
        ports::{
            SeoSettingsStorePort,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            analytics::AnalyticsQueryService, articles::ArticleQueryService,
            categories::CategoryQueryService, seo::SeoQueryService, users::UserQueryService,
        },
    },
    domain::{
        analytics::ViewStatsRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        slug::{SlugAssigner, SlugExistence},
        user::UserRepository,
    },
};

/// Composition of every command and query service over a shared set of
/// storage and security ports. Built once at startup and shared by all
/// request handlers.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub analytics_commands: Arc<AnalyticsCommandService>,
    pub seo_commands: Arc<SeoCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub user_queries: Arc<UserQueryService>,
    pub analytics_queries: Arc<AnalyticsQueryService>,
    pub seo_queries: Arc<SeoQueryService>,
    identity: Arc<IdentityService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        stats_repo: Arc<dyn ViewStatsRepository>,
        article_slugs: Arc<dyn SlugExistence>,
        category_slugs: Arc<dyn SlugExistence>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        seo_store: Arc<SeoSettingsStorePort>,
        clock: Arc<dyn Clock>,
        site_url: String,
    ) -> Self {
        let assembler = Arc::new(ArticleAssembler::new(
            Arc::clone(&user_repo),
            Arc::clone(&category_repo),
        ));
        let article_slug_assigner = Arc::new(SlugAssigner::new(article_slugs));
        let category_slug_assigner = Arc::new(SlugAssigner::new(category_slugs));

        let identity = Arc::new(IdentityService::new(
            Arc::clone(&user_repo),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&article_slug_assigner),
            Arc::clone(&assembler),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_slug_assigner),
            Arc::clone(&clock),
        ));

        let analytics_commands = Arc::new(AnalyticsCommandService::new(
            Arc::clone(&stats_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            Arc::clone(&clock),
        ));

        let seo_commands = Arc::new(SeoCommandService::new(Arc::clone(&seo_store)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&assembler),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let analytics_queries = Arc::new(AnalyticsQueryService::new(
            Arc::clone(&stats_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));
        let seo_queries = Arc::new(SeoQueryService::new(
            seo_store,
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
            site_url,
        ));

        Self {
            user_commands,
            article_commands,
            category_commands,
            analytics_commands,
            seo_commands,
            article_queries,
            category_queries,
            user_queries,
            analytics_queries,
            seo_queries,
            identity,
        }
    }

    /// Resolve a bearer token into an active principal. Handlers call this
    /// through the auth extractor rather than reimplementing the lookup.
    pub async fn resolve_principal(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.identity.resolve(token).await
    }
}
