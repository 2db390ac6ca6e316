use crate::domain::category::entity::{Category, CategoryId, CategoryUpdate, NewCategory};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;

    async fn delete(&self, id: CategoryId) -> DomainResult<()>;

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;

    async fn list(&self) -> DomainResult<Vec<Category>>;
}
