// src/infrastructure/repositories/sqlite_view_stats.rs
use super::map_sqlx;
use crate::domain::analytics::{DailyViews, ViewEvent, ViewStatsRepository, ViewTotals};
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// Views are kept as one row per article per day rather than one row per
/// hit, so the table stays small and the dashboard sums stay cheap.
#[derive(Clone)]
pub struct SqliteViewStatsRepository {
    pool: SqlitePool,
}

impl SqliteViewStatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DailyRow {
    day: NaiveDate,
    views: i64,
    unique_views: i64,
}

impl From<DailyRow> for DailyViews {
    fn from(row: DailyRow) -> Self {
        DailyViews {
            day: row.day,
            views: row.views,
            unique_views: row.unique_views,
        }
    }
}

#[derive(Debug, FromRow)]
struct TotalsRow {
    views: i64,
    unique_views: i64,
}

fn sum_views_builder<'a>(
    author_id: Option<UserId>,
    since: Option<NaiveDate>,
) -> QueryBuilder<'a, Sqlite> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT COALESCE(SUM(av.views), 0) FROM article_views av");

    if author_id.is_some() {
        builder.push(" JOIN articles a ON a.id = av.article_id");
    }

    let mut has_where = false;
    if let Some(since) = since {
        builder.push(" WHERE av.day >= ");
        builder.push_bind(since);
        has_where = true;
    }

    if let Some(author_id) = author_id {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("a.author_id = ");
        builder.push_bind(i64::from(author_id));
    }

    builder
}

#[async_trait]
impl ViewStatsRepository for SqliteViewStatsRepository {
    async fn record_view(&self, event: ViewEvent) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_views (article_id, day, views, unique_views, last_referrer, last_user_agent)
             VALUES (?, ?, 1, 1, ?, ?)
             ON CONFLICT (article_id, day) DO UPDATE SET
                views = views + 1,
                last_referrer = COALESCE(excluded.last_referrer, last_referrer),
                last_user_agent = COALESCE(excluded.last_user_agent, last_user_agent)",
        )
        .bind(i64::from(event.article_id))
        .bind(event.day)
        .bind(&event.referrer)
        .bind(&event.user_agent)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn total_views(&self, author_id: Option<UserId>) -> DomainResult<i64> {
        sum_views_builder(author_id, None)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn views_since(
        &self,
        since: NaiveDate,
        author_id: Option<UserId>,
    ) -> DomainResult<i64> {
        sum_views_builder(author_id, Some(since))
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn daily_views(
        &self,
        since: NaiveDate,
        author_id: Option<UserId>,
    ) -> DomainResult<Vec<DailyViews>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT av.day AS day, SUM(av.views) AS views, SUM(av.unique_views) AS unique_views \
             FROM article_views av",
        );

        if author_id.is_some() {
            builder.push(" JOIN articles a ON a.id = av.article_id");
        }

        builder.push(" WHERE av.day >= ");
        builder.push_bind(since);

        if let Some(author_id) = author_id {
            builder.push(" AND a.author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        builder.push(" GROUP BY av.day ORDER BY av.day");

        let rows = builder
            .build_query_as::<DailyRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(DailyViews::from).collect())
    }

    async fn article_totals(
        &self,
        article_id: ArticleId,
        since: NaiveDate,
    ) -> DomainResult<ViewTotals> {
        let row = sqlx::query_as::<_, TotalsRow>(
            "SELECT COALESCE(SUM(views), 0) AS views, COALESCE(SUM(unique_views), 0) AS unique_views \
             FROM article_views WHERE article_id = ? AND day >= ?",
        )
        .bind(i64::from(article_id))
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ViewTotals {
            views: row.views,
            unique_views: row.unique_views,
        })
    }

    async fn article_daily_views(
        &self,
        article_id: ArticleId,
        since: NaiveDate,
    ) -> DomainResult<Vec<DailyViews>> {
        let rows = sqlx::query_as::<_, DailyRow>(
            "SELECT day, views, unique_views FROM article_views \
             WHERE article_id = ? AND day >= ? ORDER BY day",
        )
        .bind(i64::from(article_id))
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(DailyViews::from).collect())
    }
}
