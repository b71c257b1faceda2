//! Meal API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Meal, MealCreate, MealDetail, MealUpdate};

use crate::api::places::load_place;
use crate::core::ServerState;
use crate::db::repository::{meal, menu};
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

async fn load_meal(state: &ServerState, id: i64) -> AppResult<Meal> {
    meal::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MealNotFound).with_detail("id", id))
}

/// Check that every menu exists and belongs to `place_id`
async fn check_menus(state: &ServerState, place_id: i64, menu_ids: &[i64]) -> AppResult<()> {
    let menus = menu::find_by_ids(&state.pool, menu_ids).await?;
    if let Some(missing) = menu_ids
        .iter()
        .find(|id| !menus.iter().any(|m| m.id == **id))
    {
        return Err(AppError::new(ErrorCode::MenuNotFound).with_detail("id", *missing));
    }
    if let Some(foreign) = menus.iter().find(|m| m.place_id != place_id) {
        return Err(AppError::with_message(
            ErrorCode::MealPlaceMismatch,
            "Menu belongs to another place",
        )
        .with_detail("menu_id", foreign.id));
    }
    Ok(())
}

/// GET /api/places/{id}/meals
pub async fn list(
    State(state): State<ServerState>,
    Path(place_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Meal>>>> {
    load_place(&state, place_id).await?;
    let meals = meal::find_by_place(&state.pool, place_id).await?;
    Ok(Json(ApiResponse::success(meals)))
}

/// POST /api/places/{id}/meals
pub async fn create(
    State(state): State<ServerState>,
    Path(place_id): Path<i64>,
    Json(payload): Json<MealCreate>,
) -> AppResult<Json<ApiResponse<MealDetail>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    load_place(&state, place_id).await?;
    check_menus(&state, place_id, &payload.menu_ids).await?;

    let meal = meal::create(&state.pool, place_id, payload.name, &payload.menu_ids).await?;
    let menu_ids = meal::find_menu_ids(&state.pool, meal.id).await?;
    tracing::info!(meal_id = meal.id, place_id, "Meal created");

    Ok(Json(ApiResponse::success_with_message(
        "New meal saved in database.",
        MealDetail { meal, menu_ids },
    )))
}

/// GET /api/meals/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<MealDetail>>> {
    let meal = load_meal(&state, id).await?;
    let menu_ids = meal::find_menu_ids(&state.pool, id).await?;
    Ok(Json(ApiResponse::success(MealDetail { meal, menu_ids })))
}

/// PUT /api/meals/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MealUpdate>,
) -> AppResult<Json<ApiResponse<MealDetail>>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    let current = load_meal(&state, id).await?;
    if let Some(menu_ids) = &payload.menu_ids {
        check_menus(&state, current.place_id, menu_ids).await?;
    }

    let meal = meal::update(&state.pool, id, payload.name, payload.menu_ids.as_deref()).await?;
    let menu_ids = meal::find_menu_ids(&state.pool, id).await?;

    Ok(Json(ApiResponse::success_with_message(
        "Meal saved to database.",
        MealDetail { meal, menu_ids },
    )))
}

/// DELETE /api/meals/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    if !meal::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::MealNotFound).with_detail("id", id));
    }
    Ok(Json(ApiResponse::success_with_message(
        "Meal removed from database.",
        true,
    )))
}
