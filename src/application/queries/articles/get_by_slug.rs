// src/application/queries/articles/get_by_slug.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        slug::Slug,
        user::Role,
    },
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Unpublished articles are masked as not-found for everyone except the
    /// owner and admins, so probing slugs leaks nothing.
    fn ensure_actor_can_view_unpublished(
        actor: Option<&AuthenticatedUser>,
        article: &Article,
    ) -> ApplicationResult<()> {
        if article.is_published() {
            return Ok(());
        }

        let actor = actor.ok_or_else(|| ApplicationError::not_found("article not found"))?;
        if actor.role != Role::Admin && actor.id != article.author_id {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(())
    }

    pub async fn get_article_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = Slug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Self::ensure_actor_can_view_unpublished(actor, &article)?;

        self.assembler.assemble(article).await
    }
}
