//! Holocron: Star Wars blog REST backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::AppError;
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{create_pool, ensure_schema, PoolConfig};
