// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleStatus,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugExistence};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str = "id, title, subtitle, content, author_id, category_id, tags, \
     featured_image, status, published_at, created_at, updated_at, views, slug, seo_title, \
     seo_description";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    subtitle: Option<String>,
    content: String,
    author_id: i64,
    category_id: i64,
    tags: String,
    featured_image: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    views: i64,
    slug: String,
    seo_title: Option<String>,
    seo_description: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let tags = serde_json::from_str::<Vec<String>>(&row.tags)
            .map_err(|err| DomainError::Persistence(format!("malformed tags column: {err}")))?;

        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            subtitle: row.subtitle,
            content: ArticleBody::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            tags,
            featured_image: row.featured_image,
            status: row.status.parse::<ArticleStatus>()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            views: row.views,
            slug: Slug::new(row.slug)?,
            seo_title: row.seo_title,
            seo_description: row.seo_description,
        })
    }
}

fn encode_tags(tags: &[String]) -> DomainResult<String> {
    serde_json::to_string(tags)
        .map_err(|err| DomainError::Persistence(format!("failed to encode tags: {err}")))
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            subtitle,
            content,
            author_id,
            category_id,
            tags,
            featured_image,
            status,
            published_at,
            created_at,
            updated_at,
            slug,
            seo_title,
            seo_description,
        } = article;

        let tags = encode_tags(&tags)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, subtitle, content, author_id, category_id, tags, \
             featured_image, status, published_at, created_at, updated_at, views, slug, \
             seo_title, seo_description)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}",
        ))
        .bind(title.as_str())
        .bind(&subtitle)
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(tags)
        .bind(&featured_image)
        .bind(status.as_str())
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .bind(slug.as_str())
        .bind(&seo_title)
        .bind(&seo_description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            subtitle,
            content,
            category_id,
            tags,
            featured_image,
            publish_state,
            slug,
            seo_title,
            seo_description,
            updated_at,
        } = update;

        let tags = tags.as_deref().map(encode_tags).transpose()?;

        // Status and its timestamp travel together. The CASE binds let an
        // unpublish carry the existing stamp through unchanged while a
        // publish overwrites it.
        let has_publish_state = publish_state.is_some();
        let (status, published_at) = match publish_state {
            Some(state) => (Some(state.status), state.published_at),
            None => (None, None),
        };

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET
                title = COALESCE(?, title),
                subtitle = COALESCE(?, subtitle),
                content = COALESCE(?, content),
                category_id = COALESCE(?, category_id),
                tags = COALESCE(?, tags),
                featured_image = COALESCE(?, featured_image),
                status = COALESCE(?, status),
                published_at = CASE WHEN ? THEN ? ELSE published_at END,
                slug = COALESCE(?, slug),
                seo_title = COALESCE(?, seo_title),
                seo_description = COALESCE(?, seo_description),
                updated_at = ?
             WHERE id = ?
             RETURNING {ARTICLE_COLUMNS}",
        ))
        .bind(title.as_ref().map(ArticleTitle::as_str))
        .bind(&subtitle)
        .bind(content.as_ref().map(ArticleBody::as_str))
        .bind(category_id.map(i64::from))
        .bind(tags)
        .bind(&featured_image)
        .bind(status.map(ArticleStatus::as_str))
        .bind(has_publish_state)
        .bind(published_at)
        .bind(slug.as_ref().map(Slug::as_str))
        .bind(&seo_title)
        .bind(&seo_description)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET views = views + 1 WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

fn push_connector(builder: &mut QueryBuilder<'_, Sqlite>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

fn apply_list_conditions<'a>(
    builder: &mut QueryBuilder<'a, Sqlite>,
    filter: &ArticleListFilter,
    search_pattern: Option<&'a str>,
) {
    let mut has_where = false;

    if let Some(status) = filter.status {
        push_connector(builder, &mut has_where);
        builder.push("status = ");
        builder.push_bind(status.as_str());
    }

    if let Some(category_id) = filter.category_id {
        push_connector(builder, &mut has_where);
        builder.push("category_id = ");
        builder.push_bind(i64::from(category_id));
    }

    if let Some(author_id) = filter.author_id {
        push_connector(builder, &mut has_where);
        builder.push("author_id = ");
        builder.push_bind(i64::from(author_id));
    }

    if let Some(pattern) = search_pattern {
        push_connector(builder, &mut has_where);
        builder.push("(title LIKE ");
        builder.push_bind(pattern);
        builder.push(" OR content LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?",
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?",
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<Article>> {
        let search_pattern = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_list_conditions(&mut builder, filter, search_pattern.as_deref());
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(i64::from(filter.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filter.skip));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(
        &self,
        author_id: Option<UserId>,
        status: Option<ArticleStatus>,
    ) -> DomainResult<u64> {
        let filter = ArticleListFilter {
            status,
            author_id,
            ..ArticleListFilter::default()
        };

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM articles");
        apply_list_conditions(&mut builder, &filter, None);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count.unsigned_abs())
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE category_id = ?")
            .bind(i64::from(category_id))
            .fetch_one(&self.pool)
            .await
            .map(i64::unsigned_abs)
            .map_err(map_sqlx)
    }

    async fn top_by_views(
        &self,
        author_id: Option<UserId>,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        if let Some(author_id) = author_id {
            builder.push(" WHERE author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        builder.push(" ORDER BY views DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_recent_published(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE status = 'published'
             ORDER BY published_at DESC LIMIT ?",
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl SlugExistence for SqliteArticleReadRepository {
    async fn slug_exists(&self, candidate: &str, excluding: Option<i64>) -> DomainResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS (SELECT 1 FROM articles WHERE slug = ? AND id != COALESCE(?, -1))",
        )
        .bind(candidate)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(exists != 0)
    }
}
