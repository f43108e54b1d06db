//! SQLite pool creation and schema DDL.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
        }
    }

    /// One-connection in-memory database; a second connection would see an
    /// independent empty store.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
        }
    }
}

pub async fn create_pool(config: &PoolConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout=5000").execute(&pool).await?;
    // Required for the favorites ON DELETE CASCADE to fire.
    sqlx::query("PRAGMA foreign_keys=ON").execute(&pool).await?;

    tracing::info!("SQLite pool created");
    Ok(pool)
}

/// Create all tables if they do not exist. Idempotent.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            username TEXT NOT NULL UNIQUE,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            gender TEXT,
            eye_color TEXT,
            age INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            climate TEXT,
            terrain TEXT,
            population INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ships (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            model TEXT,
            manufacturer TEXT,
            passengers INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One association table for all favorite kinds. The composite primary
    // key makes a repeated add a no-op instead of a duplicate row.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            kind TEXT NOT NULL,
            entity_id INTEGER NOT NULL,
            PRIMARY KEY (user_id, kind, entity_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_favorites_user_id ON favorites(user_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_schema_applies() {
        let pool = create_pool(&PoolConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        // Second run must be a no-op.
        ensure_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn favorites_pair_is_unique() {
        let pool = create_pool(&PoolConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO users (email, password, username) VALUES ('a@b.com', 'x', 'a')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO favorites (user_id, kind, entity_id) VALUES (1, 'ship', 1)")
            .execute(&pool)
            .await
            .unwrap();
        let dup = sqlx::query("INSERT INTO favorites (user_id, kind, entity_id) VALUES (1, 'ship', 1)")
            .execute(&pool)
            .await;
        assert!(dup.is_err());
    }
}
