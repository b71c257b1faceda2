//! User Repository

use super::RepoResult;
use shared::models::{Timestamped, User};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, password_hash, created_at, modified_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Insert a user; a taken username surfaces as `RepoError::Duplicate`
pub async fn create(pool: &SqlitePool, username: &str, password_hash: String) -> RepoResult<User> {
    let mut user = User {
        id: snowflake_id(),
        username: username.to_string(),
        password_hash,
        created_at: 0,
        modified_at: None,
    };
    user.on_create(now_millis());

    sqlx::query(
        "INSERT INTO user (id, username, password_hash, created_at, modified_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .bind(user.modified_at)
    .execute(pool)
    .await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use crate::db::repository::testing::test_pool;

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let user = create(&pool, "alice", "hash".into()).await.unwrap();

        let by_name = find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        assert_eq!(by_name.password_hash, "hash");
        assert!(find_by_id(&pool, user.id).await.unwrap().is_some());
        assert!(find_by_username(&pool, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_is_unique() {
        let pool = test_pool().await;
        create(&pool, "alice", "hash".into()).await.unwrap();
        let err = create(&pool, "alice", "other".into()).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
