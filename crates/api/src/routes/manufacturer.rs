//! Route definitions for the `/manufacturer` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::manufacturer;
use crate::state::AppState;

/// Routes mounted at `/manufacturer`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /name/{name}   -> get_by_name
/// PUT    /gear/{id}     -> add_gear
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(manufacturer::list).post(manufacturer::create))
        .route(
            "/{id}",
            get(manufacturer::get_by_id)
                .put(manufacturer::update)
                .delete(manufacturer::delete),
        )
        .route("/name/{name}", get(manufacturer::get_by_name))
        .route("/gear/{id}", put(manufacturer::add_gear))
}
