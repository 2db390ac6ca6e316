// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleListFilter, ArticleStatus},
        category::CategoryId,
        user::{Role, UserId},
    },
};

pub struct ListArticlesQuery {
    pub skip: i64,
    pub limit: i64,
    pub status: Option<ArticleStatus>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub search: Option<String>,
}

impl ArticleQueryService {
    /// Non-admin callers are pinned to their own articles; any `author_id`
    /// they pass is ignored. Rows whose author or category record has gone
    /// missing are dropped from the page instead of failing it.
    pub async fn list_articles(
        &self,
        actor: &AuthenticatedUser,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let (skip, limit) = Self::clamp_listing(query.skip, query.limit);

        let author_id = if actor.role == Role::Admin {
            query.author_id.map(UserId::new).transpose()?
        } else {
            Some(actor.id)
        };

        let filter = ArticleListFilter {
            status: query.status,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            author_id,
            search: query.search.filter(|s| !s.trim().is_empty()),
            skip,
            limit,
        };

        let articles = self.read_repo.list(&filter).await?;
        self.assembler.assemble_many(articles).await
    }
}
