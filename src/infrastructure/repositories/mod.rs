// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_category;
mod sqlite_user;
mod sqlite_view_stats;

pub(crate) use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_user::SqliteUserRepository;
pub use sqlite_view_stats::SqliteViewStatsRepository;
