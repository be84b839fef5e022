pub mod body_part;
pub mod equipment;
pub mod from_row;
pub mod target;
pub mod workout;

pub use body_part::{BodyPart, CreateBodyPart, UpdateBodyPart};
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
pub use from_row::FromSqliteRow;
pub use target::{CreateTarget, PresentableTarget, Target, UpdateTarget};
pub use workout::{
    CreateWorkout, Difficulty, LinkType, NewWorkout, PresentableWorkout, Workout, WorkoutRow,
};
