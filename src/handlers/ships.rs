//! Ship CRUD handlers.

use crate::error::AppError;
use crate::handlers::{parse_body, require_body};
use crate::model::NewShip;
use crate::response::{delete_receipt, results_many, results_one};
use crate::service::ShipService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ShipService::list(&state.pool).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("Ships not found".into()));
    }
    Ok(results_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let ship = ShipService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ship not found".into()))?;
    Ok(results_one(ship))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let new: NewShip = parse_body(require_body(body)?)?;
    if ShipService::name_taken(&state.pool, &new.name).await? {
        return Err(AppError::Conflict("Ship name already exists".into()));
    }
    let ship = ShipService::create(&state.pool, &new).await?;
    Ok((StatusCode::OK, Json(ship)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let ship = ShipService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ship not found".into()))?;
    Ok(delete_receipt("Ship deleted", "ship", ship))
}
