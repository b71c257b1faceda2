//! Order Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{OpenedOrderGroup, OrderGroup, OrderGroupSubmission};

use crate::api::places::load_place;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::order_group;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// POST /api/places/{id}/order-groups
///
/// Body is tagged by `channel`: `interactive` with `expiration_date`, or
/// `plain` with the form's `place_id`.
pub async fn open(
    State(state): State<ServerState>,
    Path(place_id): Path<i64>,
    user: Option<CurrentUser>,
    Json(submission): Json<OrderGroupSubmission>,
) -> AppResult<Json<ApiResponse<OpenedOrderGroup>>> {
    let place = load_place(&state, place_id).await?;

    let opened = state
        .order_groups()
        .open(&place, user.as_ref(), submission)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Order group opened.",
        opened,
    )))
}

/// GET /api/order-groups/{token}
pub async fn get_by_token(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Json<ApiResponse<OrderGroup>>> {
    let group = order_group::find_by_token(&state.pool, &token)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderGroupNotFound))?;
    Ok(Json(ApiResponse::success(group)))
}
