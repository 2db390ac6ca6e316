// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleStatus, ArticleTitle, NewArticle},
        category::CategoryId,
        errors::DomainError,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub category_id: i64,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub status: ArticleStatus,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    subtitle: Option<String>,
    content: Option<String>,
    category_id: Option<i64>,
    tags: Vec<String>,
    featured_image: Option<String>,
    status: ArticleStatus,
    seo_title: Option<String>,
    seo_description: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn featured_image(mut self, featured_image: Option<String>) -> Self {
        self.featured_image = featured_image;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn seo_title(mut self, seo_title: Option<String>) -> Self {
        self.seo_title = seo_title;
        self
    }

    pub fn seo_description(mut self, seo_description: Option<String>) -> Self {
        self.seo_description = seo_description;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            subtitle: self.subtitle,
            content: self.content.ok_or("content is required")?,
            category_id: self.category_id.ok_or("category_id is required")?,
            tags: self.tags,
            featured_image: self.featured_image,
            status: self.status,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
        })
    }
}

impl ArticleCommandService {
    /// Any active principal may create; the actor becomes the author.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleBody::new(command.content)?;
        let category_id = CategoryId::new(command.category_id)?;

        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Err(ApplicationError::validation("category does not exist"));
        }

        let now = self.clock.now();
        let slug = self.slug_assigner.assign(title.as_str(), None).await?;

        let new_article = NewArticle {
            title,
            subtitle: command.subtitle,
            content,
            author_id: actor.id,
            category_id,
            tags: command.tags,
            featured_image: command.featured_image,
            status: command.status,
            published_at: if command.status == ArticleStatus::Published {
                Some(now)
            } else {
                None
            },
            created_at: now,
            updated_at: now,
            slug,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
        };

        // The unique index stays authoritative under races; regenerate once
        // and retry, then give up with the conflict.
        let created = match self.write_repo.insert(new_article.clone()).await {
            Ok(created) => created,
            Err(DomainError::Conflict(_)) => {
                let slug = self
                    .slug_assigner
                    .assign(new_article.title.as_str(), None)
                    .await?;
                let retry = NewArticle {
                    slug,
                    ..new_article
                };
                self.write_repo.insert(retry).await?
            }
            Err(other) => return Err(other.into()),
        };

        self.assembler.assemble(created).await
    }
}
