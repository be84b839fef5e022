use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use super::{created, ok, IdPath, JsonPayload};
use crate::error::{AppError, Result};
use crate::models::{CreateBodyPart, UpdateBodyPart};
use crate::repositories::BodyPartRepository;
use crate::validation::PayloadValidator;

#[derive(Clone)]
pub struct BodyPartsState {
    pub body_part_repo: BodyPartRepository,
    pub validator: PayloadValidator,
}

pub async fn create(
    State(state): State<BodyPartsState>,
    WithRejection(Json(payload), _): JsonPayload<CreateBodyPart>,
) -> Result<impl IntoResponse> {
    state.validator.check(&payload)?;

    let body_part = state
        .body_part_repo
        .create(&payload.name, &payload.image_url)
        .await?;

    Ok(created(body_part))
}

pub async fn list(State(state): State<BodyPartsState>) -> Result<impl IntoResponse> {
    let body_parts = state.body_part_repo.find_all().await?;
    Ok(ok(body_parts))
}

pub async fn show(
    State(state): State<BodyPartsState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse> {
    let body_part = state
        .body_part_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("body part not found".to_string()))?;

    Ok(ok(body_part))
}

pub async fn update(
    State(state): State<BodyPartsState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonPayload<UpdateBodyPart>,
) -> Result<impl IntoResponse> {
    state.validator.check(&payload)?;

    let mut body_part = state
        .body_part_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("body part not found".to_string()))?;

    payload.apply(&mut body_part);
    state.body_part_repo.update(&body_part).await?;

    Ok(ok(body_part))
}

pub async fn delete(
    State(state): State<BodyPartsState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<StatusCode> {
    state.body_part_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
