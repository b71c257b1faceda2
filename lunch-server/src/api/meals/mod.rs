//! Meal API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/places/{id}/meals",
            get(handler::list).post(handler::create),
        )
        .nest("/api/meals", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/{id}",
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete),
    )
}
