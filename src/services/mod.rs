pub mod workout_service;

pub use workout_service::WorkoutService;
