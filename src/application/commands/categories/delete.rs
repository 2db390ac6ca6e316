// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        policy::ensure_role,
    },
    domain::{category::CategoryId, user::Role},
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// A category still referenced by articles cannot be removed. The
    /// foreign key backstops this check under concurrent article creation.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_role(actor, Role::Admin)?;
        let id = CategoryId::new(command.id)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        let in_use = self.article_read_repo.count_by_category(id).await?;
        if in_use > 0 {
            return Err(ApplicationError::validation(format!(
                "category is used by {in_use} article(s)"
            )));
        }

        self.category_repo.delete(id).await?;
        Ok(())
    }
}
