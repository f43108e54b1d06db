//! Ship queries.

use crate::error::AppError;
use crate::model::{FavoriteKind, NewShip, Ship};
use crate::service::FavoriteService;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, model, manufacturer, passengers";

pub struct ShipService;

impl ShipService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Ship>, AppError> {
        let rows = sqlx::query_as::<_, Ship>(&format!(
            "SELECT {} FROM ships ORDER BY id",
            COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Ship>, AppError> {
        let row = sqlx::query_as::<_, Ship>(&format!(
            "SELECT {} FROM ships WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn name_taken(pool: &SqlitePool, name: &str) -> Result<bool, AppError> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM ships WHERE name = ?)")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(taken)
    }

    pub async fn create(pool: &SqlitePool, new: &NewShip) -> Result<Ship, AppError> {
        sqlx::query_as::<_, Ship>(&format!(
            "INSERT INTO ships (name, model, manufacturer, passengers) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.model)
        .bind(&new.manufacturer)
        .bind(new.passengers)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("Ship name already exists".into())
            } else {
                AppError::Db(e)
            }
        })
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Ship>, AppError> {
        let Some(ship) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM ships WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        FavoriteService::clear_for_target(pool, FavoriteKind::Ship, id).await?;
        Ok(Some(ship))
    }
}
