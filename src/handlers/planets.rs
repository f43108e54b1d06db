//! Planet CRUD handlers.

use crate::error::AppError;
use crate::handlers::{parse_body, require_body};
use crate::model::NewPlanet;
use crate::response::{delete_receipt, results_many, results_one};
use crate::service::PlanetService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PlanetService::list(&state.pool).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("Planets not found".into()));
    }
    Ok(results_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(results_one(planet))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let new: NewPlanet = parse_body(require_body(body)?)?;
    if PlanetService::name_taken(&state.pool, &new.name).await? {
        return Err(AppError::Conflict("Planet name already exists".into()));
    }
    let planet = PlanetService::create(&state.pool, &new).await?;
    Ok((StatusCode::OK, Json(planet)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(delete_receipt("Planet deleted", "planet", planet))
}
