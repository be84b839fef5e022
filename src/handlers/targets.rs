use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use super::{created, ok, IdPath, JsonPayload};
use crate::error::{AppError, Result};
use crate::models::{CreateTarget, UpdateTarget};
use crate::repositories::TargetRepository;
use crate::validation::PayloadValidator;

#[derive(Clone)]
pub struct TargetsState {
    pub target_repo: TargetRepository,
    pub validator: PayloadValidator,
}

pub async fn create(
    State(state): State<TargetsState>,
    WithRejection(Json(payload), _): JsonPayload<CreateTarget>,
) -> Result<impl IntoResponse> {
    state.validator.check(&payload)?;

    let target = state
        .target_repo
        .create(&payload.name, payload.body_part_id)
        .await?;

    Ok(created(target))
}

pub async fn list(State(state): State<TargetsState>) -> Result<impl IntoResponse> {
    let targets = state.target_repo.find_all().await?;
    Ok(ok(targets))
}

pub async fn show(
    State(state): State<TargetsState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse> {
    let target = state
        .target_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("target not found".to_string()))?;

    Ok(ok(target))
}

pub async fn update(
    State(state): State<TargetsState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonPayload<UpdateTarget>,
) -> Result<impl IntoResponse> {
    state.validator.check(&payload)?;

    let mut target = state
        .target_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("target not found".to_string()))?;

    let moved = payload.body_part_id.is_some_and(|b| b != target.body_part_id);
    payload.apply(&mut target);
    state.target_repo.update(&target).await?;

    // Re-read so the joined body part name reflects the new owner.
    if moved {
        target = state
            .target_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("target not found".to_string()))?;
    }

    Ok(ok(target))
}

pub async fn delete(
    State(state): State<TargetsState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<StatusCode> {
    state.target_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
