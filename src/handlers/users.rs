//! User CRUD handlers.

use crate::error::AppError;
use crate::handlers::{parse_body, require_body};
use crate::model::NewUser;
use crate::response::{delete_receipt, results_many, results_one};
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = UserService::list(&state.pool).await?;
    if rows.is_empty() {
        // Empty table is reported as not found, not as an empty list.
        return Err(AppError::NotFound("Users not found".into()));
    }
    Ok(results_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::find(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(results_one(user))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let new: NewUser = parse_body(require_body(body)?)?;
    if UserService::email_or_username_taken(&state.pool, &new.email, &new.username).await? {
        return Err(AppError::Conflict("Username or Email already exists".into()));
    }
    let user = UserService::create(&state.pool, &new).await?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::delete(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(delete_receipt("User deleted", "user", user))
}
