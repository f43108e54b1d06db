//! Character queries.

use crate::error::AppError;
use crate::model::{Character, FavoriteKind, NewCharacter};
use crate::service::FavoriteService;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, gender, eye_color, age";

pub struct CharacterService;

impl CharacterService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Character>, AppError> {
        let rows = sqlx::query_as::<_, Character>(&format!(
            "SELECT {} FROM characters ORDER BY id",
            COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Character>, AppError> {
        let row = sqlx::query_as::<_, Character>(&format!(
            "SELECT {} FROM characters WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn name_taken(pool: &SqlitePool, name: &str) -> Result<bool, AppError> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM characters WHERE name = ?)")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(taken)
    }

    pub async fn create(pool: &SqlitePool, new: &NewCharacter) -> Result<Character, AppError> {
        sqlx::query_as::<_, Character>(&format!(
            "INSERT INTO characters (name, gender, eye_color, age) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.name)
        .bind(&new.gender)
        .bind(&new.eye_color)
        .bind(new.age)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("Character name already exists".into())
            } else {
                AppError::Db(e)
            }
        })
    }

    /// Delete by id, returning the pre-delete snapshot. Favorite rows
    /// pointing at the character are cleared so no dangling associations
    /// remain.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Character>, AppError> {
        let Some(character) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        FavoriteService::clear_for_target(pool, FavoriteKind::Character, id).await?;
        Ok(Some(character))
    }
}
