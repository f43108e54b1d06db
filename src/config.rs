//! Runtime settings from environment variables.

use crate::error::AppError;

/// Settings read once at startup. `DATABASE_URL` selects the store
/// (defaults to a local SQLite file), `HOST`/`PORT` select the listener.
#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

const DEFAULT_DATABASE_URL: &str = "sqlite:data/holocron.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| AppError::BadRequest(format!("invalid PORT: {}", v)))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
