//! Handlers for the `/gg/guitarist` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gg_core::types::DbId;
use gg_db::models::guitarist::{Guitarist, GuitaristInput};

use crate::error::AppResult;
use crate::query::GuitaristListParams;
use crate::state::AppState;

/// GET /gg/guitarist
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GuitaristListParams>,
) -> AppResult<Json<Vec<Guitarist>>> {
    let guitarists = state
        .guitarists
        .list_guitarists(params.genre.as_deref(), params.birth_year.as_deref())
        .await?;
    Ok(Json(guitarists))
}

/// GET /gg/guitarist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Guitarist>> {
    let guitarist = state.guitarists.get_guitarist(id).await?;
    Ok(Json(guitarist))
}

/// GET /gg/guitarist/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Guitarist>> {
    let guitarist = state.guitarists.get_guitarist_by_name(&name).await?;
    Ok(Json(guitarist))
}

/// POST /gg/guitarist
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GuitaristInput>,
) -> AppResult<Json<Guitarist>> {
    let guitarist = state.guitarists.create_guitarist(&input).await?;
    Ok(Json(guitarist))
}

/// PUT /gg/guitarist/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GuitaristInput>,
) -> AppResult<Json<Guitarist>> {
    let guitarist = state.guitarists.update_guitarist(id, &input).await?;
    Ok(Json(guitarist))
}

/// DELETE /gg/guitarist/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.guitarists.delete_guitarist(id).await?;
    Ok(StatusCode::OK)
}
