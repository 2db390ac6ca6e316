// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_owner_or_admin,
    },
    domain::{
        article::{Article, ArticleBody, ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate},
        category::CategoryId,
        errors::DomainError,
    },
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub status: Option<ArticleStatus>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl ArticleCommandService {
    /// Authors may edit their own articles; admins may edit any. A changed
    /// title re-derives the slug, so old links stop resolving.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        ensure_owner_or_admin(actor, article.author_id)?;

        let UpdateArticleCommand {
            id: _,
            title,
            subtitle,
            content,
            category_id,
            tags,
            featured_image,
            status,
            seo_title,
            seo_description,
        } = command;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        if let Some(title) = title {
            let title = ArticleTitle::new(title)?;
            let slug = self
                .slug_assigner
                .assign(title.as_str(), Some(i64::from(id)))
                .await?;
            update = update.with_title(title).with_slug(slug);
        }
        if let Some(subtitle) = subtitle {
            update = update.with_subtitle(subtitle);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleBody::new(content)?);
        }
        if let Some(category_id) = category_id {
            let category_id = CategoryId::new(category_id)?;
            if self.category_repo.find_by_id(category_id).await?.is_none() {
                return Err(ApplicationError::validation("category does not exist"));
            }
            update = update.with_category(category_id);
        }
        if let Some(tags) = tags {
            update = update.with_tags(tags);
        }
        if let Some(featured_image) = featured_image {
            update = update.with_featured_image(featured_image);
        }
        if let Some(status) = status {
            update = Self::apply_status_update(&article, status, now, update);
        }
        if let Some(seo_title) = seo_title {
            update = update.with_seo_title(seo_title);
        }
        if let Some(seo_description) = seo_description {
            update = update.with_seo_description(seo_description);
        }

        let updated = match self.write_repo.update(update.clone()).await {
            Ok(updated) => updated,
            Err(DomainError::Conflict(reason)) => {
                let Some(title) = update.title.clone() else {
                    return Err(DomainError::Conflict(reason).into());
                };
                let slug = self
                    .slug_assigner
                    .assign(title.as_str(), Some(i64::from(id)))
                    .await?;
                self.write_repo.update(update.with_slug(slug)).await?
            }
            Err(other) => return Err(other.into()),
        };

        self.assembler.assemble(updated).await
    }

    fn apply_status_update(
        article: &Article,
        status: ArticleStatus,
        now: chrono::DateTime<chrono::Utc>,
        update: ArticleUpdate,
    ) -> ArticleUpdate {
        if status == article.status {
            return update;
        }
        // Stamp only on the transition into published; leaving the published
        // state keeps the original stamp.
        let published_at = if status == ArticleStatus::Published {
            Some(now)
        } else {
            article.published_at
        };
        update.with_publish_state(status, published_at)
    }
}
