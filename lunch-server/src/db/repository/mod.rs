//! Repository Module
//!
//! Free-function CRUD over the SQLite pool, one module per table.

pub mod meal;
pub mod menu;
pub mod order_group;
pub mod place;
pub mod user;

use shared::error::AppError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepoError::Validation(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod testing {
    use shared::models::{Place, PlaceCreate};
    use sqlx::SqlitePool;

    use crate::db::DbService;

    pub async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    pub async fn seed_place(pool: &SqlitePool, name: &str) -> Place {
        super::place::create(
            pool,
            PlaceCreate {
                name: name.to_string(),
                latitude: None,
                longitude: None,
            },
        )
        .await
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_repo_error_to_app_error() {
        assert_eq!(
            AppError::from(RepoError::Duplicate("x".into())).code,
            ErrorCode::AlreadyExists
        );
        assert_eq!(
            AppError::from(RepoError::Database("x".into())).code,
            ErrorCode::DatabaseError
        );
        assert_eq!(
            AppError::from(RepoError::Validation("x".into())).code,
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            AppError::from(RepoError::NotFound("Place 1".into())).code,
            ErrorCode::NotFound
        );
    }
}
