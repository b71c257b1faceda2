//! Order group API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/places/{id}/order-groups | POST | interactive channel only |
//! | /api/order-groups/{token} | GET | none |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/places/{id}/order-groups", post(handler::open))
        .route("/api/order-groups/{token}", get(handler::get_by_token))
}
