use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use super::{created, ok, IdPath, JsonPayload};
use crate::error::{AppError, Result};
use crate::models::{CreateEquipment, UpdateEquipment};
use crate::repositories::EquipmentRepository;
use crate::validation::PayloadValidator;

#[derive(Clone)]
pub struct EquipmentState {
    pub equipment_repo: EquipmentRepository,
    pub validator: PayloadValidator,
}

pub async fn create(
    State(state): State<EquipmentState>,
    WithRejection(Json(payload), _): JsonPayload<CreateEquipment>,
) -> Result<impl IntoResponse> {
    state.validator.check(&payload)?;
    let equipment = state.equipment_repo.create(&payload.name).await?;
    Ok(created(equipment))
}

pub async fn list(State(state): State<EquipmentState>) -> Result<impl IntoResponse> {
    let equipment = state.equipment_repo.find_all().await?;
    Ok(ok(equipment))
}

pub async fn show(
    State(state): State<EquipmentState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse> {
    let equipment = state
        .equipment_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("equipment not found".to_string()))?;

    Ok(ok(equipment))
}

pub async fn update(
    State(state): State<EquipmentState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(payload), _): JsonPayload<UpdateEquipment>,
) -> Result<impl IntoResponse> {
    state.validator.check(&payload)?;

    let mut equipment = state
        .equipment_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("equipment not found".to_string()))?;

    payload.apply(&mut equipment);
    state.equipment_repo.update(&equipment).await?;

    Ok(ok(equipment))
}

pub async fn delete(
    State(state): State<EquipmentState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<StatusCode> {
    state.equipment_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
