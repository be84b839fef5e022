pub mod body_parts;
pub mod equipment;
pub mod health;
pub mod targets;
pub mod workouts;

use axum::{extract::Path, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor whose decode failures surface as `AppError`.
pub type JsonPayload<T> = WithRejection<Json<T>, AppError>;

/// Numeric `{id}` path segment; unparsable ids answer with the JSON error body.
pub type IdPath = WithRejection<Path<i64>, AppError>;

/// Uniform success body: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { data })
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, ok(data))
}
