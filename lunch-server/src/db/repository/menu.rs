//! Menu Repository

use super::RepoResult;
use shared::models::{Meal, Menu, Timestamped};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, place_id, created_at, modified_at";

pub async fn find_by_place(pool: &SqlitePool, place_id: i64) -> RepoResult<Vec<Menu>> {
    let menus = sqlx::query_as::<_, Menu>(&format!(
        "SELECT {COLUMNS} FROM menu WHERE place_id = ? ORDER BY name, id"
    ))
    .bind(place_id)
    .fetch_all(pool)
    .await?;
    Ok(menus)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Menu>> {
    let menu = sqlx::query_as::<_, Menu>(&format!("SELECT {COLUMNS} FROM menu WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(menu)
}

/// Menus among `ids` that exist, in id order
pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<Menu>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT {COLUMNS} FROM menu WHERE id IN ({placeholders}) ORDER BY id");
    let mut query = sqlx::query_as::<_, Menu>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    Ok(query.fetch_all(pool).await?)
}

/// Meals on a menu, ordered by name
pub async fn find_meals(pool: &SqlitePool, menu_id: i64) -> RepoResult<Vec<Meal>> {
    let meals = sqlx::query_as::<_, Meal>(
        "SELECT m.id, m.name, m.place_id, m.created_at, m.modified_at FROM meal m JOIN menus_meals mm ON mm.meal_id = m.id WHERE mm.menu_id = ? ORDER BY m.name, m.id",
    )
    .bind(menu_id)
    .fetch_all(pool)
    .await?;
    Ok(meals)
}

pub async fn create(pool: &SqlitePool, place_id: i64, name: String) -> RepoResult<Menu> {
    let mut menu = Menu {
        id: snowflake_id(),
        name,
        place_id,
        created_at: 0,
        modified_at: None,
    };
    menu.on_create(now_millis());

    sqlx::query(
        "INSERT INTO menu (id, name, place_id, created_at, modified_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(menu.id)
    .bind(&menu.name)
    .bind(menu.place_id)
    .bind(menu.created_at)
    .bind(menu.modified_at)
    .execute(pool)
    .await?;
    Ok(menu)
}

/// Put a meal on a menu; attaching twice is a no-op
pub async fn attach_meal(pool: &SqlitePool, menu_id: i64, meal_id: i64) -> RepoResult<()> {
    sqlx::query("INSERT OR IGNORE INTO menus_meals (menu_id, meal_id) VALUES (?, ?)")
        .bind(menu_id)
        .bind(meal_id)
        .execute(pool)
        .await?;
    touch(pool, menu_id).await
}

/// Take a meal off a menu, `false` when it was not on it
pub async fn detach_meal(pool: &SqlitePool, menu_id: i64, meal_id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menus_meals WHERE menu_id = ? AND meal_id = ?")
        .bind(menu_id)
        .bind(meal_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Ok(false);
    }
    touch(pool, menu_id).await?;
    Ok(true)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Record a modification of the menu's meal set
async fn touch(pool: &SqlitePool, menu_id: i64) -> RepoResult<()> {
    sqlx::query("UPDATE menu SET modified_at = ? WHERE id = ?")
        .bind(now_millis())
        .bind(menu_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::meal;
    use crate::db::repository::testing::{seed_place, test_pool};

    #[tokio::test]
    async fn test_attach_and_detach() {
        let pool = test_pool().await;
        let place = seed_place(&pool, "Chez Paul").await;
        let menu = create(&pool, place.id, "Midi".into()).await.unwrap();
        let soup = meal::create(&pool, place.id, "Soupe".into(), &[]).await.unwrap();
        let cake = meal::create(&pool, place.id, "Gâteau".into(), &[]).await.unwrap();

        attach_meal(&pool, menu.id, soup.id).await.unwrap();
        attach_meal(&pool, menu.id, cake.id).await.unwrap();
        attach_meal(&pool, menu.id, cake.id).await.unwrap();

        let names: Vec<String> = find_meals(&pool, menu.id)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Gâteau", "Soupe"]);

        let stored = find_by_id(&pool, menu.id).await.unwrap().unwrap();
        assert_eq!(stored.created_at, menu.created_at);
        assert!(stored.modified_at.is_some());

        assert!(detach_meal(&pool, menu.id, soup.id).await.unwrap());
        assert!(!detach_meal(&pool, menu.id, soup.id).await.unwrap());
        assert_eq!(find_meals(&pool, menu.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_meal_unlinks_it() {
        let pool = test_pool().await;
        let place = seed_place(&pool, "Chez Paul").await;
        let menu = create(&pool, place.id, "Midi".into()).await.unwrap();
        let soup = meal::create(&pool, place.id, "Soupe".into(), &[menu.id])
            .await
            .unwrap();

        meal::delete(&pool, soup.id).await.unwrap();
        assert!(find_meals(&pool, menu.id).await.unwrap().is_empty());
        assert!(find_by_id(&pool, menu.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_by_ids() {
        let pool = test_pool().await;
        let place = seed_place(&pool, "Chez Paul").await;
        let a = create(&pool, place.id, "A".into()).await.unwrap();
        let b = create(&pool, place.id, "B".into()).await.unwrap();

        assert!(find_by_ids(&pool, &[]).await.unwrap().is_empty());
        let found = find_by_ids(&pool, &[a.id, b.id, 404]).await.unwrap();
        assert_eq!(found.len(), 2);
    }
}
