//! Route definitions for the `/guitarist` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::guitarist;
use crate::state::AppState;

/// Routes mounted at `/guitarist`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /name/{name}   -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guitarist::list).post(guitarist::create))
        .route(
            "/{id}",
            get(guitarist::get_by_id)
                .put(guitarist::update)
                .delete(guitarist::delete),
        )
        .route("/name/{name}", get(guitarist::get_by_name))
}
