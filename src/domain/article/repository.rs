use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub status: Option<ArticleStatus>,
    pub category_id: Option<CategoryId>,
    pub author_id: Option<UserId>,
    pub search: Option<String>,
    pub skip: u32,
    pub limit: u32,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn increment_views(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;
    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<Article>>;
    async fn count(
        &self,
        author_id: Option<UserId>,
        status: Option<ArticleStatus>,
    ) -> DomainResult<u64>;
    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;
    async fn top_by_views(&self, author_id: Option<UserId>, limit: u32)
    -> DomainResult<Vec<Article>>;
    async fn list_recent_published(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
