pub mod body_part_repo;
pub mod equipment_repo;
pub mod target_repo;
pub mod workout_repo;

pub use body_part_repo::BodyPartRepository;
pub use equipment_repo::EquipmentRepository;
pub use target_repo::TargetRepository;
pub use workout_repo::WorkoutRepository;
