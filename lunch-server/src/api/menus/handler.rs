//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Menu, MenuCreate, MenuDetail};

use crate::api::places::load_place;
use crate::core::ServerState;
use crate::db::repository::{meal, menu};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

async fn load_menu(state: &ServerState, id: i64) -> AppResult<Menu> {
    menu::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound).with_detail("id", id))
}

async fn menu_detail(state: &ServerState, menu: Menu) -> AppResult<MenuDetail> {
    let meals = menu::find_meals(&state.pool, menu.id).await?;
    Ok(MenuDetail { menu, meals })
}

/// GET /api/places/{id}/menus
pub async fn list(
    State(state): State<ServerState>,
    Path(place_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Menu>>>> {
    load_place(&state, place_id).await?;
    let menus = menu::find_by_place(&state.pool, place_id).await?;
    Ok(Json(ApiResponse::success(menus)))
}

/// POST /api/places/{id}/menus
pub async fn create(
    State(state): State<ServerState>,
    Path(place_id): Path<i64>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    load_place(&state, place_id).await?;

    let menu = menu::create(&state.pool, place_id, payload.name).await?;
    Ok(Json(ApiResponse::success_with_message(
        "New menu saved in database.",
        menu,
    )))
}

/// GET /api/menus/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<MenuDetail>>> {
    let menu = load_menu(&state, id).await?;
    Ok(Json(ApiResponse::success(menu_detail(&state, menu).await?)))
}

/// DELETE /api/menus/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    if !menu::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::MenuNotFound).with_detail("id", id));
    }
    Ok(Json(ApiResponse::success_with_message(
        "Menu removed from database.",
        true,
    )))
}

/// PUT /api/menus/{id}/meals/{meal_id}
pub async fn attach_meal(
    State(state): State<ServerState>,
    Path((id, meal_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<MenuDetail>>> {
    let menu = load_menu(&state, id).await?;
    let meal = meal::find_by_id(&state.pool, meal_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MealNotFound).with_detail("id", meal_id))?;
    if meal.place_id != menu.place_id {
        return Err(AppError::new(ErrorCode::MealPlaceMismatch)
            .with_detail("meal_id", meal_id)
            .with_detail("menu_id", id));
    }

    menu::attach_meal(&state.pool, id, meal_id).await?;
    Ok(Json(ApiResponse::success(menu_detail(&state, menu).await?)))
}

/// DELETE /api/menus/{id}/meals/{meal_id}
pub async fn detach_meal(
    State(state): State<ServerState>,
    Path((id, meal_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<MenuDetail>>> {
    let menu = load_menu(&state, id).await?;
    if !menu::detach_meal(&state.pool, id, meal_id).await? {
        return Err(AppError::with_message(ErrorCode::MealNotFound, "Meal is not on this menu")
            .with_detail("meal_id", meal_id));
    }
    Ok(Json(ApiResponse::success(menu_detail(&state, menu).await?)))
}
