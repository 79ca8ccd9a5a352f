//! Handlers for the `/gg/gear` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gg_core::types::DbId;
use gg_db::models::gear::{Gear, GearInput};
use gg_db::models::guitarist::Guitarist;
use gg_db::models::EntityRef;

use crate::error::AppResult;
use crate::query::GearListParams;
use crate::state::AppState;

/// GET /gg/gear
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GearListParams>,
) -> AppResult<Json<Vec<Gear>>> {
    let gear = state
        .gear
        .list_gear(params.brand_name.as_deref(), params.gear_type.as_deref())
        .await?;
    Ok(Json(gear))
}

/// GET /gg/gear/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Gear>> {
    let gear = state.gear.get_gear(id).await?;
    Ok(Json(gear))
}

/// POST /gg/gear
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GearInput>,
) -> AppResult<Json<Gear>> {
    let gear = state.gear.create_gear(&input).await?;
    Ok(Json(gear))
}

/// PUT /gg/gear/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GearInput>,
) -> AppResult<Json<Gear>> {
    let gear = state.gear.update_gear(id, &input).await?;
    Ok(Json(gear))
}

/// DELETE /gg/gear/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.gear.delete_gear(id).await?;
    Ok(StatusCode::OK)
}

/// GET /gg/gear/guitarist/{id}
pub async fn list_by_guitarist(
    State(state): State<AppState>,
    Path(guitarist_id): Path<DbId>,
) -> AppResult<Json<Vec<Gear>>> {
    let gear = state.gear.list_gear_of_guitarist(guitarist_id).await?;
    Ok(Json(gear))
}

/// PUT /gg/gear/guitarist/{id}
pub async fn add_to_guitarist(
    State(state): State<AppState>,
    Path(guitarist_id): Path<DbId>,
    Json(gear): Json<EntityRef>,
) -> AppResult<Json<Guitarist>> {
    let guitarist = state.gear.add_gear_to_guitarist(guitarist_id, gear).await?;
    Ok(Json(guitarist))
}

/// DELETE /gg/gear/guitarist/{id}
pub async fn remove_from_guitarist(
    State(state): State<AppState>,
    Path(guitarist_id): Path<DbId>,
    Json(gear): Json<EntityRef>,
) -> AppResult<Json<Guitarist>> {
    let guitarist = state
        .gear
        .remove_gear_from_guitarist_list(guitarist_id, gear)
        .await?;
    Ok(Json(guitarist))
}

/// PUT /gg/gear/manufacturer/{id}
pub async fn add_to_manufacturer(
    State(state): State<AppState>,
    Path(manufacturer_id): Path<DbId>,
    Json(gear): Json<EntityRef>,
) -> AppResult<Json<Gear>> {
    let gear = state.gear.add_gear_to_manufacturer(manufacturer_id, gear).await?;
    Ok(Json(gear))
}
