//! Order Group Repository

use super::{RepoError, RepoResult};
use shared::models::OrderGroup;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, token, expires_at, place_id, user_id, created_at, modified_at";

/// Column named by SQLite when the token UNIQUE constraint fails
const TOKEN_CONSTRAINT: &str = "order_group.token";

/// Whether `err` is a collision on the public token (not on the id)
pub fn is_token_conflict(err: &RepoError) -> bool {
    matches!(err, RepoError::Duplicate(msg) if msg.contains(TOKEN_CONSTRAINT))
}

/// Insert a fully built order group
///
/// A token or id already in use surfaces as [`RepoError::Duplicate`];
/// tell them apart with [`is_token_conflict`].
pub async fn create(pool: &SqlitePool, group: &OrderGroup) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO order_group (id, token, expires_at, place_id, user_id, created_at, modified_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(group.id)
    .bind(&group.token)
    .bind(group.expires_at)
    .bind(group.place_id)
    .bind(group.user_id)
    .bind(group.created_at)
    .bind(group.modified_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_token(pool: &SqlitePool, token: &str) -> RepoResult<Option<OrderGroup>> {
    let group = sqlx::query_as::<_, OrderGroup>(&format!(
        "SELECT {COLUMNS} FROM order_group WHERE token = ?"
    ))
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(group)
}

pub async fn count_by_place(pool: &SqlitePool, place_id: i64) -> RepoResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_group WHERE place_id = ?")
        .bind(place_id)
        .fetch_one(pool)
        .await?;
    Ok(count as u64)
}
