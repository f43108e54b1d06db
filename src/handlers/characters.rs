//! Character CRUD handlers.

use crate::error::AppError;
use crate::handlers::{parse_body, require_body};
use crate::model::NewCharacter;
use crate::response::{delete_receipt, results_many, results_one};
use crate::service::CharacterService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CharacterService::list(&state.pool).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("Characters not found".into()));
    }
    Ok(results_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".into()))?;
    Ok(results_one(character))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let new: NewCharacter = parse_body(require_body(body)?)?;
    if CharacterService::name_taken(&state.pool, &new.name).await? {
        return Err(AppError::Conflict("Character name already exists".into()));
    }
    let character = CharacterService::create(&state.pool, &new).await?;
    Ok((StatusCode::OK, Json(character)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".into()))?;
    Ok(delete_receipt("Character deleted", "character", character))
}
