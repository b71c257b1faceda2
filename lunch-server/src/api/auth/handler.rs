//! Authentication Handlers
//!
//! Registration, login and current user lookup

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{Credentials, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::auth::password::{hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, user};
use crate::utils::validation::{validate_password, validate_username};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Fixed delay on failed logins
const AUTH_FAILURE_DELAY_MS: u64 = 300;

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<Credentials>,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let username = req.username.trim();
    validate_username(username)?;
    validate_password(&req.password)?;

    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user = user::create(&state.pool, username, password_hash)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => {
                AppError::new(ErrorCode::UsernameExists).with_detail("username", username)
            }
            other => other.into(),
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok(Json(ApiResponse::success_with_message(
        "Account created.",
        UserInfo::from(&user),
    )))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<Credentials>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let username = req.username.trim();
    let user = user::find_by_username(&state.pool, username).await?;

    // Same answer for unknown user and wrong password
    let user = match user {
        Some(u) if verify_password(&req.password, &u.password_hash) => u,
        _ => {
            tokio::time::sleep(Duration::from_millis(AUTH_FAILURE_DELAY_MS)).await;
            crate::security_log!("WARN", "login_failed", username = username.to_string());
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        user: UserInfo::from(&user),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let user = user::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(AppError::not_authenticated)?;
    Ok(Json(ApiResponse::success(UserInfo::from(&user))))
}
