//! Menu API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/places/{id}/menus",
            get(handler::list).post(handler::create),
        )
        .nest("/api/menus", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route(
            "/{id}/meals/{meal_id}",
            put(handler::attach_meal).delete(handler::detach_meal),
        )
}
