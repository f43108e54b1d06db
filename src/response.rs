//! Standard response envelope helpers.
//!
//! Reads are wrapped in `{"msg": "All good", "results": ...}`; mutations
//! return `{"message": ...}` bodies, with the deleted row attached for
//! delete receipts.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ResultsOne<T> {
    pub msg: &'static str,
    pub results: T,
}

#[derive(Serialize)]
pub struct ResultsMany<T> {
    pub msg: &'static str,
    pub results: Vec<T>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

const ALL_GOOD: &str = "All good";

pub fn results_one<T: Serialize>(row: T) -> (StatusCode, Json<ResultsOne<T>>) {
    (
        StatusCode::OK,
        Json(ResultsOne {
            msg: ALL_GOOD,
            results: row,
        }),
    )
}

pub fn results_many<T: Serialize>(rows: Vec<T>) -> (StatusCode, Json<ResultsMany<T>>) {
    (
        StatusCode::OK,
        Json(ResultsMany {
            msg: ALL_GOOD,
            results: rows,
        }),
    )
}

pub fn message(text: &'static str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message: text }))
}

/// Delete receipt: `{"message": ..., "<key>": <deleted row>}`.
pub fn delete_receipt<T: Serialize>(
    text: &'static str,
    key: &'static str,
    row: T,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut body = serde_json::Map::new();
    body.insert("message".into(), serde_json::Value::String(text.into()));
    body.insert(
        key.into(),
        serde_json::to_value(row).unwrap_or(serde_json::Value::Null),
    );
    (StatusCode::OK, Json(serde_json::Value::Object(body)))
}
