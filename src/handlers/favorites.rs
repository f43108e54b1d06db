//! Favorites management: add, remove, and per-user listing.

use crate::error::AppError;
use crate::model::FavoriteKind;
use crate::response::message;
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct FavoritesBody {
    pub username: String,
    pub favorite_characters: Vec<String>,
    pub favorite_planets: Vec<String>,
    pub favorite_ships: Vec<String>,
}

/// Label used in "User or X not found" / "X not in favorites" messages.
fn label(kind: FavoriteKind) -> &'static str {
    match kind {
        FavoriteKind::Character => "Character",
        FavoriteKind::Planet => "Planet",
        FavoriteKind::Ship => "Ship",
    }
}

/// Both sides of the association must exist before it is touched.
async fn ensure_sides(
    state: &AppState,
    user_id: i64,
    kind: FavoriteKind,
    entity_id: i64,
) -> Result<(), AppError> {
    let user_exists = UserService::find(&state.pool, user_id).await?.is_some();
    let target_exists = FavoriteService::target_exists(&state.pool, kind, entity_id).await?;
    if !user_exists || !target_exists {
        return Err(AppError::NotFound(format!(
            "User or {} not found",
            label(kind)
        )));
    }
    Ok(())
}

async fn add(
    state: &AppState,
    user_id: i64,
    kind: FavoriteKind,
    entity_id: i64,
) -> Result<(), AppError> {
    ensure_sides(state, user_id, kind, entity_id).await?;
    FavoriteService::add(&state.pool, user_id, kind, entity_id).await
}

async fn remove(
    state: &AppState,
    user_id: i64,
    kind: FavoriteKind,
    entity_id: i64,
) -> Result<(), AppError> {
    ensure_sides(state, user_id, kind, entity_id).await?;
    let removed = FavoriteService::remove(&state.pool, user_id, kind, entity_id).await?;
    if !removed {
        return Err(AppError::NotFound(format!(
            "{} not in favorites",
            label(kind)
        )));
    }
    Ok(())
}

pub async fn add_character(
    State(state): State<AppState>,
    Path((user_id, entity_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteKind::Character, entity_id).await?;
    Ok(message("Favorite character added"))
}

pub async fn add_planet(
    State(state): State<AppState>,
    Path((user_id, entity_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteKind::Planet, entity_id).await?;
    Ok(message("Favorite planet added"))
}

pub async fn add_ship(
    State(state): State<AppState>,
    Path((user_id, entity_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteKind::Ship, entity_id).await?;
    Ok(message("Favorite ship added"))
}

pub async fn remove_character(
    State(state): State<AppState>,
    Path((user_id, entity_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteKind::Character, entity_id).await?;
    Ok(message("Favorite character removed"))
}

pub async fn remove_planet(
    State(state): State<AppState>,
    Path((user_id, entity_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteKind::Planet, entity_id).await?;
    Ok(message("Favorite planet removed"))
}

pub async fn remove_ship(
    State(state): State<AppState>,
    Path((user_id, entity_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteKind::Ship, entity_id).await?;
    Ok(message("Favorite ship removed"))
}

pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<FavoritesBody>, AppError> {
    let user = UserService::find(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let favorite_characters =
        FavoriteService::names_for_user(&state.pool, user_id, FavoriteKind::Character).await?;
    let favorite_planets =
        FavoriteService::names_for_user(&state.pool, user_id, FavoriteKind::Planet).await?;
    let favorite_ships =
        FavoriteService::names_for_user(&state.pool, user_id, FavoriteKind::Ship).await?;

    Ok(Json(FavoritesBody {
        username: user.username,
        favorite_characters,
        favorite_planets,
        favorite_ships,
    }))
}
