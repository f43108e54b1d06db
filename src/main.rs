//! Server entry point: env config, SQLite pool, schema, routes.

use holocron::{api_routes, common_routes, create_pool, ensure_schema, AppState, PoolConfig, Settings};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("holocron=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;

    // The default store is a file under data/; make sure the directory is
    // there before sqlx opens it.
    if let Some(path) = settings
        .database_url
        .strip_prefix("sqlite:")
        .map(|p| p.split('?').next().unwrap_or(p))
    {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    let pool = create_pool(&PoolConfig::new(&settings.database_url)).await?;
    ensure_schema(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(settings.addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
