//! Handlers for the `/gg/manufacturer` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gg_core::types::DbId;
use gg_db::models::gear::Gear;
use gg_db::models::manufacturer::{Manufacturer, ManufacturerInput};
use gg_db::models::EntityRef;

use crate::error::AppResult;
use crate::query::ManufacturerListParams;
use crate::state::AppState;

/// GET /gg/manufacturer
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ManufacturerListParams>,
) -> AppResult<Json<Vec<Manufacturer>>> {
    let manufacturers = state
        .manufacturers
        .list_manufacturers(params.main_product_type.as_deref())
        .await?;
    Ok(Json(manufacturers))
}

/// GET /gg/manufacturer/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = state.manufacturers.get_manufacturer(id).await?;
    Ok(Json(manufacturer))
}

/// GET /gg/manufacturer/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = state.manufacturers.get_manufacturer_by_name(&name).await?;
    Ok(Json(manufacturer))
}

/// POST /gg/manufacturer
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ManufacturerInput>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = state.manufacturers.create_manufacturer(&input).await?;
    Ok(Json(manufacturer))
}

/// PUT /gg/manufacturer/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ManufacturerInput>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = state.manufacturers.update_manufacturer(id, &input).await?;
    Ok(Json(manufacturer))
}

/// DELETE /gg/manufacturer/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.manufacturers.delete_manufacturer(id).await?;
    Ok(StatusCode::OK)
}

/// PUT /gg/manufacturer/gear/{id}
///
/// Same association as `PUT /gg/gear/manufacturer/{id}`, reached from the
/// manufacturer side.
pub async fn add_gear(
    State(state): State<AppState>,
    Path(manufacturer_id): Path<DbId>,
    Json(gear): Json<EntityRef>,
) -> AppResult<Json<Gear>> {
    let gear = state.gear.add_gear_to_manufacturer(manufacturer_id, gear).await?;
    Ok(Json(gear))
}
