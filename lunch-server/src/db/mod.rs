//! Database Module
//!
//! SQLite connection pool and embedded migrations

pub mod repository;

use shared::error::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Database service, owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file in WAL mode and apply migrations
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .busy_timeout(std::time::Duration::from_millis(5000))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database with the schema applied
    ///
    /// A single connection keeps every query on the same memory database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunch.db");
        let path = path.to_str().unwrap();

        let db = DbService::new(path).await.unwrap();
        sqlx::query("INSERT INTO place (id, name, created_at) VALUES (1, 'Chez Paul', 0)")
            .execute(&db.pool)
            .await
            .unwrap();
        db.pool.close().await;

        // Reopening re-runs migrations as a no-op
        let db = DbService::new(path).await.unwrap();
        let (name,): (String,) = sqlx::query_as("SELECT name FROM place WHERE id = 1")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(name, "Chez Paul");
    }

    #[tokio::test]
    async fn test_in_memory_enforces_foreign_keys() {
        let db = DbService::in_memory().await.unwrap();
        let result = sqlx::query("INSERT INTO meal (id, name, place_id, created_at) VALUES (1, 'Soupe', 99, 0)")
            .execute(&db.pool)
            .await;
        assert!(result.is_err());
    }
}
