// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_role,
    },
    domain::{
        category::{CategoryId, CategoryName, CategoryUpdate},
        errors::DomainError,
        user::Role,
    },
};

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    /// Renaming a category re-derives its slug, so category pages linked
    /// under the old slug stop resolving.
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_role(actor, Role::Admin)?;
        let id = CategoryId::new(command.id)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        let mut update = CategoryUpdate::new(id);
        if let Some(name) = command.name {
            let name = CategoryName::new(name)?;
            let slug = self
                .slug_assigner
                .assign(name.as_str(), Some(i64::from(id)))
                .await?;
            update = update.with_name(name).with_slug(slug);
        }
        if let Some(description) = command.description {
            update = update.with_description(description);
        }

        let updated = match self.category_repo.update(update.clone()).await {
            Ok(updated) => updated,
            Err(DomainError::Conflict(reason)) => {
                let Some(name) = update.name.clone() else {
                    return Err(DomainError::Conflict(reason).into());
                };
                let slug = self
                    .slug_assigner
                    .assign(name.as_str(), Some(i64::from(id)))
                    .await?;
                self.category_repo.update(update.with_slug(slug)).await?
            }
            Err(other) => return Err(other.into()),
        };

        Ok(updated.into())
    }
}
