use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::handlers::{body_parts, equipment, health, targets, workouts};

pub fn create_router(
    body_parts_state: body_parts::BodyPartsState,
    targets_state: targets::TargetsState,
    equipment_state: equipment::EquipmentState,
    workouts_state: workouts::WorkoutsState,
) -> Router {
    let api = Router::new()
        .route("/ping", get(health::ping))
        // Body part routes
        .route(
            "/bodyparts",
            get(body_parts::list).post(body_parts::create),
        )
        .route(
            "/bodyparts/{id}",
            get(body_parts::show)
                .patch(body_parts::update)
                .delete(body_parts::delete),
        )
        .with_state(body_parts_state)
        // Target routes
        .route("/targets", get(targets::list).post(targets::create))
        .route(
            "/targets/{id}",
            get(targets::show)
                .patch(targets::update)
                .delete(targets::delete),
        )
        .with_state(targets_state)
        // Equipment routes
        .route("/equipment", get(equipment::list).post(equipment::create))
        .route(
            "/equipment/{id}",
            get(equipment::show)
                .patch(equipment::update)
                .delete(equipment::delete),
        )
        .with_state(equipment_state)
        // Workout routes
        .route("/workouts", get(workouts::list).post(workouts::create))
        .route("/workouts/{id}", get(workouts::show))
        .with_state(workouts_state);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}
