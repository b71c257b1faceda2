//! Current user extractors
//!
//! `CurrentUser` in a handler signature requires authentication;
//! `Option<CurrentUser>` accepts anonymous requests.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::auth::middleware::authenticate;
use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use shared::error::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        match <CurrentUser as OptionalFromRequestParts<ServerState>>::from_request_parts(
            parts, state,
        )
        .await?
        {
            Some(user) => Ok(user),
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                Err(AppError::not_authenticated())
            }
        }
    }
}

impl OptionalFromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Option<Self>, Self::Rejection> {
        // Already resolved by the middleware
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(Some(user.clone()));
        }

        let Some(header) = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        else {
            return Ok(None);
        };

        let token = JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;
        let user = authenticate(&state.get_jwt_service(), token, &parts.uri)?;

        parts.extensions.insert(user.clone());
        Ok(Some(user))
    }
}
