use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use super::{created, ok, IdPath, JsonPayload};
use crate::error::Result;
use crate::models::CreateWorkout;
use crate::services::WorkoutService;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_service: WorkoutService,
}

pub async fn create(
    State(state): State<WorkoutsState>,
    WithRejection(Json(payload), _): JsonPayload<CreateWorkout>,
) -> Result<impl IntoResponse> {
    let workout = state.workout_service.create(payload).await?;
    Ok(created(workout))
}

pub async fn list(State(state): State<WorkoutsState>) -> Result<impl IntoResponse> {
    let workouts = state.workout_service.list().await?;
    Ok(ok(workouts))
}

pub async fn show(
    State(state): State<WorkoutsState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<impl IntoResponse> {
    let workout = state.workout_service.get(id).await?;
    Ok(ok(workout))
}
