//! Favorite association queries. One table covers all three kinds.

use crate::error::AppError;
use crate::model::FavoriteKind;
use sqlx::SqlitePool;

pub struct FavoriteService;

impl FavoriteService {
    /// Idempotent add: a repeated (user, kind, entity) triple hits the
    /// composite primary key and is ignored.
    pub async fn add(
        pool: &SqlitePool,
        user_id: i64,
        kind: FavoriteKind,
        entity_id: i64,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO favorites (user_id, kind, entity_id) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(kind.storage_key())
            .bind(entity_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Returns false when the association was not present.
    pub async fn remove(
        pool: &SqlitePool,
        user_id: i64,
        kind: FavoriteKind,
        entity_id: i64,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "DELETE FROM favorites WHERE user_id = ? AND kind = ? AND entity_id = ?",
        )
        .bind(user_id)
        .bind(kind.storage_key())
        .bind(entity_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Names (not ids) of one kind of favorite for a user, in insertion-id
    /// order of the target rows.
    pub async fn names_for_user(
        pool: &SqlitePool,
        user_id: i64,
        kind: FavoriteKind,
    ) -> Result<Vec<String>, AppError> {
        // kind.table() is a fixed identifier, never user input.
        let sql = format!(
            "SELECT t.name FROM {} t \
             JOIN favorites f ON f.entity_id = t.id \
             WHERE f.user_id = ? AND f.kind = ? \
             ORDER BY t.id",
            kind.table()
        );
        let names = sqlx::query_scalar(&sql)
            .bind(user_id)
            .bind(kind.storage_key())
            .fetch_all(pool)
            .await?;
        Ok(names)
    }

    /// Does a row of this kind exist? Used to validate the target side of
    /// an association before touching it.
    pub async fn target_exists(
        pool: &SqlitePool,
        kind: FavoriteKind,
        entity_id: i64,
    ) -> Result<bool, AppError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)",
            kind.table()
        );
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(entity_id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Drop all associations pointing at a deleted target row.
    pub async fn clear_for_target(
        pool: &SqlitePool,
        kind: FavoriteKind,
        entity_id: i64,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM favorites WHERE kind = ? AND entity_id = ?")
            .bind(kind.storage_key())
            .bind(entity_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewUser;
    use crate::service::UserService;
    use crate::store::{create_pool, ensure_schema, PoolConfig};

    async fn setup() -> SqlitePool {
        let pool = create_pool(&PoolConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    async fn seed_user(pool: &SqlitePool) -> i64 {
        let user = UserService::create(
            pool,
            &NewUser {
                email: "leia@alderaan.org".into(),
                password: "x".into(),
                username: "leia".into(),
                is_active: true,
            },
        )
        .await
        .unwrap();
        user.id
    }

    async fn seed_character(pool: &SqlitePool, name: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO characters (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let pool = setup().await;
        let user_id = seed_user(&pool).await;
        let char_id = seed_character(&pool, "Han Solo").await;

        FavoriteService::add(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();
        FavoriteService::add(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();

        let names = FavoriteService::names_for_user(&pool, user_id, FavoriteKind::Character)
            .await
            .unwrap();
        assert_eq!(names, vec!["Han Solo".to_string()]);
    }

    #[tokio::test]
    async fn remove_reports_absent_association() {
        let pool = setup().await;
        let user_id = seed_user(&pool).await;
        let char_id = seed_character(&pool, "Chewbacca").await;

        let removed = FavoriteService::remove(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();
        assert!(!removed);

        FavoriteService::add(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();
        let removed = FavoriteService::remove(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();
        assert!(removed);
    }

    #[tokio::test]
    async fn user_delete_cascades_to_favorites() {
        let pool = setup().await;
        let user_id = seed_user(&pool).await;
        let char_id = seed_character(&pool, "R2-D2").await;
        FavoriteService::add(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();

        UserService::delete(&pool, user_id).await.unwrap();

        let left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(left, 0);
    }

    #[tokio::test]
    async fn kinds_do_not_mix() {
        let pool = setup().await;
        let user_id = seed_user(&pool).await;
        // Same numeric id as a character and as a planet.
        let char_id = seed_character(&pool, "Obi-Wan").await;
        sqlx::query("INSERT INTO planets (name) VALUES ('Tatooine')")
            .execute(&pool)
            .await
            .unwrap();

        FavoriteService::add(&pool, user_id, FavoriteKind::Character, char_id)
            .await
            .unwrap();

        let planets = FavoriteService::names_for_user(&pool, user_id, FavoriteKind::Planet)
            .await
            .unwrap();
        assert!(planets.is_empty());
    }
}
