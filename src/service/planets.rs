//! Planet queries.

use crate::error::AppError;
use crate::model::{FavoriteKind, NewPlanet, Planet};
use crate::service::FavoriteService;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, climate, terrain, population";

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, AppError> {
        let rows = sqlx::query_as::<_, Planet>(&format!(
            "SELECT {} FROM planets ORDER BY id",
            COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, AppError> {
        let row = sqlx::query_as::<_, Planet>(&format!(
            "SELECT {} FROM planets WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn name_taken(pool: &SqlitePool, name: &str) -> Result<bool, AppError> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM planets WHERE name = ?)")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(taken)
    }

    pub async fn create(pool: &SqlitePool, new: &NewPlanet) -> Result<Planet, AppError> {
        sqlx::query_as::<_, Planet>(&format!(
            "INSERT INTO planets (name, climate, terrain, population) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.climate)
        .bind(&new.terrain)
        .bind(new.population)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("Planet name already exists".into())
            } else {
                AppError::Db(e)
            }
        })
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, AppError> {
        let Some(planet) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        FavoriteService::clear_for_target(pool, FavoriteKind::Planet, id).await?;
        Ok(Some(planet))
    }
}
