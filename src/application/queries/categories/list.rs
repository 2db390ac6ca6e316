// src/application/queries/categories/list.rs
use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

impl CategoryQueryService {
    /// Public; the catalogue is small enough to return whole.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
