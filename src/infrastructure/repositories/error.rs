// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

/// SQLite reports constraint violations through the error message rather
/// than named constraints, so unique-index failures are told apart by the
/// `table.column` fragment SQLite embeds in the text.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();

            if db_err.is_unique_violation() {
                return if message.contains("articles.slug") || message.contains("categories.slug")
                {
                    DomainError::Conflict("slug already exists".into())
                } else if message.contains("users.username") {
                    DomainError::Conflict("username already exists".into())
                } else if message.contains("users.email") {
                    DomainError::Conflict("email already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::Conflict("referenced record is missing or still in use".into());
            }

            DomainError::Persistence(message)
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
