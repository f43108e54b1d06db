//! User queries.

use crate::error::AppError;
use crate::model::{NewUser, User};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, email, password, username, is_active";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users ORDER BY id",
            COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn email_or_username_taken(
        pool: &SqlitePool,
        email: &str,
        username: &str,
    ) -> Result<bool, AppError> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ? OR username = ?)",
        )
        .bind(email)
        .bind(username)
        .fetch_one(pool)
        .await?;
        Ok(taken)
    }

    /// Insert and return the created row. The taken-check above races with
    /// concurrent creates; the UNIQUE constraints are the backstop, and a
    /// violation maps to the same duplicate response.
    pub async fn create(pool: &SqlitePool, new: &NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password, username, is_active) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&new.email)
        .bind(&new.password)
        .bind(&new.username)
        .bind(new.is_active)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if AppError::is_unique_violation(&e) {
                AppError::Conflict("Username or Email already exists".into())
            } else {
                AppError::Db(e)
            }
        })
    }

    /// Delete by id, returning the pre-delete snapshot. Favorite rows go
    /// with the user via ON DELETE CASCADE.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let Some(user) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(Some(user))
    }
}
