//! Entity and favorites routes.
//!
//! Create endpoints are registered with and without a trailing slash; the
//! original service was slash-lenient and clients post to `/users/`.

use crate::handlers::{characters, favorites, planets, ships, users};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/", post(users::create))
        .route("/users/:user_id", get(users::read).delete(users::delete))
        .route("/users/:user_id/favorites", get(favorites::list_for_user))
        .route(
            "/users/:user_id/add_fav_char/:entity_id",
            post(favorites::add_character),
        )
        .route(
            "/users/:user_id/add_fav_planet/:entity_id",
            post(favorites::add_planet),
        )
        .route(
            "/users/:user_id/add_fav_ship/:entity_id",
            post(favorites::add_ship),
        )
        .route(
            "/users/:user_id/delete_fav_char/:entity_id",
            delete(favorites::remove_character),
        )
        .route(
            "/users/:user_id/delete_fav_planet/:entity_id",
            delete(favorites::remove_planet),
        )
        .route(
            "/users/:user_id/delete_fav_ship/:entity_id",
            delete(favorites::remove_ship),
        )
        .route("/characters", get(characters::list).post(characters::create))
        .route("/characters/", post(characters::create))
        .route(
            "/characters/:id",
            get(characters::read).delete(characters::delete),
        )
        .route("/planets", get(planets::list).post(planets::create))
        .route("/planets/", post(planets::create))
        .route("/planets/:id", get(planets::read).delete(planets::delete))
        .route("/ships", get(ships::list).post(ships::create))
        .route("/ships/", post(ships::create))
        .route("/ships/:id", get(ships::read).delete(ships::delete))
        .with_state(state)
}
