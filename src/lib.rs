pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;
pub mod version;

use axum::Router;

use db::Database;
use handlers::{body_parts, equipment, targets, workouts};
use repositories::{BodyPartRepository, EquipmentRepository, TargetRepository, WorkoutRepository};
use services::WorkoutService;
use validation::PayloadValidator;

/// Wires repositories, the workout service and handler states into the router.
pub fn build_app(db: Database, validator: PayloadValidator) -> Router {
    let body_parts_state = body_parts::BodyPartsState {
        body_part_repo: BodyPartRepository::new(db.clone()),
        validator: validator.clone(),
    };
    let targets_state = targets::TargetsState {
        target_repo: TargetRepository::new(db.clone()),
        validator: validator.clone(),
    };
    let equipment_state = equipment::EquipmentState {
        equipment_repo: EquipmentRepository::new(db.clone()),
        validator: validator.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_service: WorkoutService::new(WorkoutRepository::new(db), validator),
    };

    routes::create_router(
        body_parts_state,
        targets_state,
        equipment_state,
        workouts_state,
    )
}
