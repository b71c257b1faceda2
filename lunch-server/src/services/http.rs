//! HTTP application assembly

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::resolve_user;
use crate::core::ServerState;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(
        target: "http_access",
        "{} {} {} {}ms",
        method,
        uri,
        status,
        started.elapsed().as_millis()
    );

    response
}

/// All API routes (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::places::router())
        .merge(crate::api::meals::router())
        .merge(crate::api::menus::router())
        .merge(crate::api::order_groups::router())
}

/// Routes bound to `state` with the middleware stack
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .layer(middleware::from_fn_with_state(state.clone(), resolve_user))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
