// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
        policy::ensure_role,
    },
    domain::{
        category::{CategoryName, NewCategory},
        errors::DomainError,
        user::Role,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_role(actor, Role::Admin)?;
        let name = CategoryName::new(command.name)?;
        let slug = self.slug_assigner.assign(name.as_str(), None).await?;

        let new_category = NewCategory {
            name,
            slug,
            description: command.description,
            created_at: self.clock.now(),
        };

        let created = match self.category_repo.insert(new_category.clone()).await {
            Ok(created) => created,
            Err(DomainError::Conflict(_)) => {
                let slug = self
                    .slug_assigner
                    .assign(new_category.name.as_str(), None)
                    .await?;
                let retry = NewCategory {
                    slug,
                    ..new_category
                };
                self.category_repo.insert(retry).await?
            }
            Err(other) => return Err(other.into()),
        };

        Ok(created.into())
    }
}
