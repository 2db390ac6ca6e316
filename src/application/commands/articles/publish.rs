// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_role,
    },
    domain::{
        article::{ArticleId, ArticleUpdate},
        user::Role,
    },
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_role(actor, Role::Editor)?;
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.is_published() == command.publish {
            return self.assembler.assemble(article).await;
        }

        let now = self.clock.now();
        if command.publish {
            article.publish(now);
        } else {
            article.unpublish(now);
        }

        let update = ArticleUpdate::new(id, article.updated_at)
            .with_publish_state(article.status, article.published_at);
        let updated = self.write_repo.update(update).await?;
        self.assembler.assemble(updated).await
    }
}
