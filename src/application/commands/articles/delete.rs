// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        policy::{ensure_owner_or_admin, ensure_role},
    },
    domain::{article::ArticleId, user::Role},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deletion takes both the editor role and ownership; admins bypass both
    /// checks. Recorded view rows go with the article.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        ensure_role(actor, Role::Editor)?;
        ensure_owner_or_admin(actor, article.author_id)?;

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
