//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/health | GET | none |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0" }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | error
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
