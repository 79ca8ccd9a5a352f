//! Route definitions for the `/gear` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gear;
use crate::state::AppState;

/// Routes mounted at `/gear`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
///
/// GET    /guitarist/{id}        -> list_by_guitarist
/// PUT    /guitarist/{id}        -> add_to_guitarist
/// DELETE /guitarist/{id}        -> remove_from_guitarist
/// PUT    /manufacturer/{id}     -> add_to_manufacturer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gear::list).post(gear::create))
        .route(
            "/{id}",
            get(gear::get_by_id).put(gear::update).delete(gear::delete),
        )
        .route(
            "/guitarist/{id}",
            get(gear::list_by_guitarist)
                .put(gear::add_to_guitarist)
                .delete(gear::remove_from_guitarist),
        )
        .route("/manufacturer/{id}", put(gear::add_to_manufacturer))
}
