//! Place API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{PLACES_PER_PAGE, PlaceIndex};
pub(crate) use handler::load_place;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/places", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::index))
        .route("/{id}", get(handler::show));

    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        );

    read_routes.merge(manage_routes)
}
