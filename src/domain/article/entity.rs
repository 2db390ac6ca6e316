// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
use crate::domain::category::CategoryId;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: Option<String>,
    pub content: ArticleBody,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i64,
    pub slug: Slug,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    /// Returns to draft. The original publication stamp is kept so a later
    /// republish can be compared against it.
    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Draft;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub subtitle: Option<String>,
    pub content: ArticleBody,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub slug: Slug,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub subtitle: Option<String>,
    pub content: Option<ArticleBody>,
    pub category_id: Option<CategoryId>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub publish_state: Option<PublishStateUpdate>,
    pub slug: Option<Slug>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            content: None,
            category_id: None,
            tags: None,
            featured_image: None,
            publish_state: None,
            slug: None,
            seo_title: None,
            seo_description: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_content(mut self, content: ArticleBody) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_featured_image(mut self, featured_image: String) -> Self {
        self.featured_image = Some(featured_image);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            status,
            published_at,
        });
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_seo_title(mut self, seo_title: String) -> Self {
        self.seo_title = Some(seo_title);
        self
    }

    pub fn with_seo_description(mut self, seo_description: String) -> Self {
        self.seo_description = Some(seo_description);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            subtitle: None,
            content: ArticleBody::new("content").unwrap(),
            author_id: UserId::new(1).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            tags: vec![],
            featured_image: None,
            status: ArticleStatus::Draft,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            views: 0,
            slug: Slug::new("title").unwrap(),
            seo_title: None,
            seo_description: None,
        }
    }

    #[test]
    fn publish_sets_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.publish(now);
        assert!(article.is_published());
        assert_eq!(article.published_at, Some(now));
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn unpublish_returns_to_draft_keeping_the_stamp() {
        let mut article = sample_article();
        let now = Utc::now();
        article.publish(now);
        let later = now + chrono::Duration::seconds(10);
        article.unpublish(later);
        assert_eq!(article.status, ArticleStatus::Draft);
        assert_eq!(article.published_at, Some(now));
        assert_eq!(article.updated_at, later);
    }
}
