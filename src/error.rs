//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Legacy clients expect 404 for duplicate email/username/name,
            // not 409.
            AppError::Conflict(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(e) => {
                if matches!(e, sqlx::Error::RowNotFound) {
                    StatusCode::NOT_FOUND
                } else {
                    tracing::error!(error = %e, "database error");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// True when the underlying sqlx error is a UNIQUE constraint violation.
    /// The uniqueness pre-checks race with concurrent inserts; the constraint
    /// is the authoritative check.
    pub fn is_unique_violation(e: &sqlx::Error) -> bool {
        e.as_database_error()
            .map(|d| d.is_unique_violation())
            .unwrap_or(false)
    }
}
