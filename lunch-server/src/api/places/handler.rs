//! Place API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use shared::{PageQuery, PaginatedResponse};
use shared::models::{Place, PlaceCreate, PlaceDetail, PlaceUpdate};

use crate::core::ServerState;
use crate::db::repository::{RepoError, meal, menu, place};
use crate::map::PlaceMap;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_latitude, validate_longitude, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub const PLACES_PER_PAGE: u32 = 4;

/// Place list page with the map of every located place
#[derive(Debug, Serialize)]
pub struct PlaceIndex {
    #[serde(flatten)]
    pub page: PaginatedResponse<Place>,
    pub map: PlaceMap,
}

pub(crate) async fn load_place(state: &ServerState, id: i64) -> AppResult<Place> {
    place::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::PlaceNotFound).with_detail("id", id))
}

/// GET /api/places?page=N
pub async fn index(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<PlaceIndex>>> {
    if query.page == 0 {
        return Err(
            AppError::with_message(ErrorCode::ValueOutOfRange, "page must be at least 1")
                .with_detail("field", "page"),
        );
    }

    let places = place::find_page(
        &state.pool,
        PLACES_PER_PAGE,
        query.offset(PLACES_PER_PAGE),
    )
    .await?;
    let total = place::count(&state.pool).await?;
    let all = place::find_all(&state.pool).await?;

    Ok(Json(ApiResponse::success(PlaceIndex {
        page: PaginatedResponse::new(places, total, query.page, PLACES_PER_PAGE),
        map: PlaceMap::for_places(&all),
    })))
}

/// POST /api/places
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceCreate>,
) -> AppResult<Json<ApiResponse<Place>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_latitude(payload.latitude)?;
    validate_longitude(payload.longitude)?;

    let place = place::create(&state.pool, payload).await?;
    tracing::info!(place_id = place.id, name = %place.name, "Place created");

    Ok(Json(ApiResponse::success_with_message(
        "New place saved in database.",
        place,
    )))
}

/// GET /api/places/{id}
pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<PlaceDetail>>> {
    let place = load_place(&state, id).await?;
    let meals = meal::find_by_place(&state.pool, id).await?;
    let menus = menu::find_by_place(&state.pool, id).await?;

    Ok(Json(ApiResponse::success(PlaceDetail {
        place,
        meals,
        menus,
    })))
}

/// PUT /api/places/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PlaceUpdate>,
) -> AppResult<Json<ApiResponse<Place>>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_latitude(payload.latitude.flatten())?;
    validate_longitude(payload.longitude.flatten())?;

    let place = place::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::PlaceNotFound).with_detail("id", id),
            other => other.into(),
        })?;
    tracing::info!(place_id = id, "Place updated");

    Ok(Json(ApiResponse::success_with_message(
        "Place saved to database.",
        place,
    )))
}

/// DELETE /api/places/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    if !place::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::PlaceNotFound).with_detail("id", id));
    }
    tracing::info!(place_id = id, "Place deleted");

    Ok(Json(ApiResponse::success_with_message(
        "Place removed from database.",
        true,
    )))
}
