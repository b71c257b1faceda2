//! Meal Repository

use super::{RepoError, RepoResult};
use shared::models::{Meal, Timestamped};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, place_id, created_at, modified_at";

pub async fn find_by_place(pool: &SqlitePool, place_id: i64) -> RepoResult<Vec<Meal>> {
    let meals = sqlx::query_as::<_, Meal>(&format!(
        "SELECT {COLUMNS} FROM meal WHERE place_id = ? ORDER BY name, id"
    ))
    .bind(place_id)
    .fetch_all(pool)
    .await?;
    Ok(meals)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Meal>> {
    let meal = sqlx::query_as::<_, Meal>(&format!("SELECT {COLUMNS} FROM meal WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(meal)
}

/// Ids of the menus a meal appears on
pub async fn find_menu_ids(pool: &SqlitePool, meal_id: i64) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT menu_id FROM menus_meals WHERE meal_id = ? ORDER BY menu_id",
    )
    .bind(meal_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Insert a meal and link it to `menu_ids` in one transaction
///
/// Callers check that the menus belong to the same place.
pub async fn create(
    pool: &SqlitePool,
    place_id: i64,
    name: String,
    menu_ids: &[i64],
) -> RepoResult<Meal> {
    let mut meal = Meal {
        id: snowflake_id(),
        name,
        place_id,
        created_at: 0,
        modified_at: None,
    };
    meal.on_create(now_millis());

    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO meal (id, name, place_id, created_at, modified_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(meal.id)
    .bind(&meal.name)
    .bind(meal.place_id)
    .bind(meal.created_at)
    .bind(meal.modified_at)
    .execute(&mut *tx)
    .await?;

    for menu_id in menu_ids {
        sqlx::query("INSERT OR IGNORE INTO menus_meals (menu_id, meal_id) VALUES (?, ?)")
            .bind(*menu_id)
            .bind(meal.id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(meal)
}

/// Rename a meal and, when `menu_ids` is given, replace its menu set
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: Option<String>,
    menu_ids: Option<&[i64]>,
) -> RepoResult<Meal> {
    let mut meal = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Meal {id}")))?;
    if let Some(name) = name {
        meal.name = name;
    }
    meal.on_update(now_millis());

    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE meal SET name = ?, modified_at = ? WHERE id = ?")
        .bind(&meal.name)
        .bind(meal.modified_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if let Some(menu_ids) = menu_ids {
        sqlx::query("DELETE FROM menus_meals WHERE meal_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for menu_id in menu_ids {
            sqlx::query("INSERT OR IGNORE INTO menus_meals (menu_id, meal_id) VALUES (?, ?)")
                .bind(*menu_id)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;

    Ok(meal)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM meal WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
