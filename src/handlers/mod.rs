//! Request handlers, one module per resource.

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod ships;
pub mod users;

use crate::error::AppError;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Unwrap an optional JSON body. The extractor yields `None` when the body
/// is missing, empty, or not JSON; all of those are validation errors here,
/// not framework defaults.
pub(crate) fn require_body(body: Option<Json<Value>>) -> Result<Value, AppError> {
    match body {
        Some(Json(value)) => Ok(value),
        None => Err(AppError::Validation("request body is required".into())),
    }
}

/// Deserialize a JSON body into a typed request struct, turning missing or
/// mistyped fields into a validation error instead of a raw key lookup
/// failure.
pub(crate) fn parse_body<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}
