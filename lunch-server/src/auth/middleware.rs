//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use shared::error::AppError;

/// Resolve the optional current user
///
/// With an `Authorization: Bearer <token>` header the token must be valid;
/// the resulting [`CurrentUser`] is inserted into the request extensions.
/// Without the header the request continues anonymously and each handler
/// decides whether that is acceptable.
///
/// | Case | Result |
/// |------|--------|
/// | no header | anonymous |
/// | not a Bearer header | 401 TokenInvalid |
/// | expired token | 401 TokenExpired |
/// | invalid token | 401 TokenInvalid |
pub async fn resolve_user(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let Some(header) = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(next.run(req).await);
    };

    let token = JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    let user = authenticate(&state.get_jwt_service(), token, req.uri())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Validate a bearer token into a [`CurrentUser`], logging failures
pub(crate) fn authenticate(
    jwt_service: &JwtService,
    token: &str,
    uri: &http::Uri,
) -> Result<CurrentUser, AppError> {
    let result = jwt_service
        .validate_token(token)
        .and_then(CurrentUser::try_from);

    result.map_err(|e| {
        security_log!(
            "WARN",
            "auth_failed",
            error = format!("{}", e),
            uri = format!("{:?}", uri)
        );

        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })
}
