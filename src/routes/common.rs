//! Common routes: sitemap, health, version.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Registered API surface, kept in sync with `api_routes`. Served from `/`
/// as a machine-readable sitemap.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/version"),
    ("GET", "/users"),
    ("POST", "/users/"),
    ("GET", "/users/{id}"),
    ("DELETE", "/users/{id}"),
    ("GET", "/users/{id}/favorites"),
    ("POST", "/users/{id}/add_fav_char/{char_id}"),
    ("POST", "/users/{id}/add_fav_planet/{planet_id}"),
    ("POST", "/users/{id}/add_fav_ship/{ship_id}"),
    ("DELETE", "/users/{id}/delete_fav_char/{char_id}"),
    ("DELETE", "/users/{id}/delete_fav_planet/{planet_id}"),
    ("DELETE", "/users/{id}/delete_fav_ship/{ship_id}"),
    ("GET", "/characters"),
    ("POST", "/characters/"),
    ("GET", "/characters/{id}"),
    ("DELETE", "/characters/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets/"),
    ("GET", "/planets/{id}"),
    ("DELETE", "/planets/{id}"),
    ("GET", "/ships"),
    ("POST", "/ships/"),
    ("GET", "/ships/{id}"),
    ("DELETE", "/ships/{id}"),
];

#[derive(Serialize)]
struct Endpoint {
    method: &'static str,
    path: &'static str,
}

#[derive(Serialize)]
struct SitemapBody {
    endpoints: Vec<Endpoint>,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn sitemap() -> Json<SitemapBody> {
    Json(SitemapBody {
        endpoints: ENDPOINTS
            .iter()
            .map(|&(method, path)| Endpoint { method, path })
            .collect(),
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET / (sitemap), GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health))
        .route("/version", get(version))
}
