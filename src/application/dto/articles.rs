// src/application/dto/articles.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Article;
use crate::domain::category::CategoryRepository;
use crate::domain::user::UserRepository;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use super::categories::CategoryDto;
use super::serde_time;
use super::users::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub content: String,
    pub author: UserDto,
    pub category: CategoryDto,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: String,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub views: i64,
    pub slug: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

impl ArticleDto {
    pub fn from_parts(article: Article, author: UserDto, category: CategoryDto) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            subtitle: article.subtitle,
            content: article.content.into_inner(),
            author,
            category,
            tags: article.tags,
            featured_image: article.featured_image,
            status: article.status.to_string(),
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            views: article.views,
            slug: article.slug.into_inner(),
            seo_title: article.seo_title,
            seo_description: article.seo_description,
        }
    }
}

/// Hydrates article records with their author and category objects, which
/// the wire format embeds in full.
pub struct ArticleAssembler {
    user_repo: Arc<dyn UserRepository>,
    category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleAssembler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            user_repo,
            category_repo,
        }
    }

    /// Single-record hydration. Dangling author or category references are
    /// an integrity fault and surface as an infrastructure error.
    pub async fn assemble(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let author = self.user_repo.find_by_id(article.author_id).await?;
        let category = self.category_repo.find_by_id(article.category_id).await?;

        match (author, category) {
            (Some(author), Some(category)) => {
                Ok(ArticleDto::from_parts(article, author.into(), category.into()))
            }
            _ => Err(ApplicationError::infrastructure("article data incomplete")),
        }
    }

    /// Batch hydration for listings. Records whose author or category can no
    /// longer be resolved are dropped from the page instead of failing it.
    pub async fn assemble_many(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let mut author_ids: Vec<_> = articles.iter().map(|article| article.author_id).collect();
        author_ids.sort_by_key(|id| i64::from(*id));
        author_ids.dedup();

        let mut category_ids: Vec<_> =
            articles.iter().map(|article| article.category_id).collect();
        category_ids.sort_by_key(|id| i64::from(*id));
        category_ids.dedup();

        let authors: HashMap<i64, UserDto> = self
            .user_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|user| (i64::from(user.id), UserDto::from(user)))
            .collect();
        let categories: HashMap<i64, CategoryDto> = self
            .category_repo
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|category| (i64::from(category.id), CategoryDto::from(category)))
            .collect();

        Ok(articles
            .into_iter()
            .filter_map(|article| {
                let author = authors.get(&i64::from(article.author_id))?.clone();
                let category = categories.get(&i64::from(article.category_id))?.clone();
                Some(ArticleDto::from_parts(article, author, category))
            })
            .collect())
    }
}
