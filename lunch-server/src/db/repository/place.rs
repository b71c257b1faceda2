//! Place Repository

use super::{RepoError, RepoResult};
use shared::models::{Place, PlaceCreate, PlaceUpdate, Timestamped};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, latitude, longitude, created_at, modified_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Place>> {
    let places =
        sqlx::query_as::<_, Place>(&format!("SELECT {COLUMNS} FROM place ORDER BY name, id"))
            .fetch_all(pool)
            .await?;
    Ok(places)
}

/// One page of places ordered by name
pub async fn find_page(pool: &SqlitePool, limit: u32, offset: u32) -> RepoResult<Vec<Place>> {
    let places = sqlx::query_as::<_, Place>(&format!(
        "SELECT {COLUMNS} FROM place ORDER BY name, id LIMIT ? OFFSET ?"
    ))
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;
    Ok(places)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM place")
        .fetch_one(pool)
        .await?;
    Ok(count as u64)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Place>> {
    let place = sqlx::query_as::<_, Place>(&format!("SELECT {COLUMNS} FROM place WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(place)
}

pub async fn create(pool: &SqlitePool, data: PlaceCreate) -> RepoResult<Place> {
    let mut place = Place {
        id: snowflake_id(),
        name: data.name,
        latitude: data.latitude,
        longitude: data.longitude,
        created_at: 0,
        modified_at: None,
    };
    place.on_create(now_millis());

    sqlx::query(
        "INSERT INTO place (id, name, latitude, longitude, created_at, modified_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(place.id)
    .bind(&place.name)
    .bind(place.latitude)
    .bind(place.longitude)
    .bind(place.created_at)
    .bind(place.modified_at)
    .execute(pool)
    .await?;
    Ok(place)
}

/// Apply the provided fields; absent fields keep their value, null coordinates are cleared
pub async fn update(pool: &SqlitePool, id: i64, data: PlaceUpdate) -> RepoResult<Place> {
    let mut place = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Place {id}")))?;

    if let Some(name) = data.name {
        place.name = name;
    }
    if let Some(latitude) = data.latitude {
        place.latitude = latitude;
    }
    if let Some(longitude) = data.longitude {
        place.longitude = longitude;
    }
    place.on_update(now_millis());

    let rows = sqlx::query(
        "UPDATE place SET name = ?1, latitude = ?2, longitude = ?3, modified_at = ?4 WHERE id = ?5",
    )
    .bind(&place.name)
    .bind(place.latitude)
    .bind(place.longitude)
    .bind(place.modified_at)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Place {id}")));
    }
    Ok(place)
}

/// Delete a place; its meals, menus and order groups go with it
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM place WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::{seed_place, test_pool};
    use crate::db::repository::{meal, order_group};
    use shared::models::OrderGroup;

    #[tokio::test]
    async fn test_create_sets_created_only() {
        let pool = test_pool().await;
        let place = seed_place(&pool, "Chez Paul").await;
        assert!(place.created_at > 0);
        assert_eq!(place.modified_at, None);

        let stored = find_by_id(&pool, place.id).await.unwrap().unwrap();
        assert_eq!(stored, place);
    }

    #[tokio::test]
    async fn test_update_sets_modified_and_keeps_created() {
        let pool = test_pool().await;
        let place = seed_place(&pool, "Chez Paul").await;

        let updated = update(
            &pool,
            place.id,
            PlaceUpdate {
                latitude: Some(Some(44.84)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Chez Paul");
        assert_eq!(updated.latitude, Some(44.84));
        assert_eq!(updated.created_at, place.created_at);
        assert!(updated.modified_at.is_some());
        assert_eq!(find_by_id(&pool, place.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_clears_coordinates() {
        let pool = test_pool().await;
        let place = create(
            &pool,
            PlaceCreate {
                name: "Chez Paul".into(),
                latitude: Some(44.84),
                longitude: Some(-0.57),
            },
        )
        .await
        .unwrap();

        let updated = update(
            &pool,
            place.id,
            PlaceUpdate {
                latitude: Some(None),
                longitude: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.latitude, None);
        assert_eq!(updated.longitude, None);

        let stored = find_by_id(&pool, place.id).await.unwrap().unwrap();
        assert_eq!(stored.latitude, None);
        assert_eq!(stored.longitude, None);
    }

    #[tokio::test]
    async fn test_update_unknown_place() {
        let pool = test_pool().await;
        let err = update(&pool, 404, PlaceUpdate::default()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_pages_ordered_by_name() {
        let pool = test_pool().await;
        for name in ["Eden", "Bistro", "Angelo", "Dolce", "Cantine", "Fumoir"] {
            seed_place(&pool, name).await;
        }

        assert_eq!(count(&pool).await.unwrap(), 6);

        let first: Vec<String> = find_page(&pool, 4, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(first, ["Angelo", "Bistro", "Cantine", "Dolce"]);

        let second = find_page(&pool, 4, 4).await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].name, "Eden");

        assert!(find_page(&pool, 4, 8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let pool = test_pool().await;
        let place = seed_place(&pool, "Chez Paul").await;
        meal::create(&pool, place.id, "Soupe".into(), &[])
            .await
            .unwrap();
        order_group::create(
            &pool,
            &OrderGroup {
                id: snowflake_id(),
                token: "a".repeat(32),
                expires_at: None,
                place_id: place.id,
                user_id: None,
                created_at: now_millis(),
                modified_at: None,
            },
        )
        .await
        .unwrap();

        assert!(delete(&pool, place.id).await.unwrap());
        assert!(find_by_id(&pool, place.id).await.unwrap().is_none());
        assert!(meal::find_by_place(&pool, place.id).await.unwrap().is_empty());
        assert_eq!(order_group::count_by_place(&pool, place.id).await.unwrap(), 0);

        assert!(!delete(&pool, place.id).await.unwrap());
    }
}
