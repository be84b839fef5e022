use crate::error::{AppError, Result};
use crate::models::{CreateWorkout, PresentableWorkout, Workout};
use crate::repositories::WorkoutRepository;
use crate::validation::PayloadValidator;

/// Creates workouts together with their target links and serves the
/// name-resolved read views.
#[derive(Clone)]
pub struct WorkoutService {
    repo: WorkoutRepository,
    validator: PayloadValidator,
}

impl WorkoutService {
    pub fn new(repo: WorkoutRepository, validator: PayloadValidator) -> Self {
        Self { repo, validator }
    }

    pub async fn create(&self, payload: CreateWorkout) -> Result<Workout> {
        self.validator.check_workout(&payload)?;

        let (workout, primary_target, secondary_targets) = payload.into_parts();
        let workout = self
            .repo
            .create_and_link_targets(workout, primary_target, secondary_targets)
            .await?;

        tracing::info!("Created workout {} ({})", workout.id, workout.name);
        Ok(workout)
    }

    pub async fn get(&self, id: i64) -> Result<PresentableWorkout> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("workout not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<PresentableWorkout>> {
        self.repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, Database, DEFAULT_QUERY_TIMEOUT};
    use crate::migrations::run_migrations_for_tests;
    use crate::models::Difficulty;
    use crate::repositories::{BodyPartRepository, TargetRepository};

    async fn setup() -> (WorkoutService, i64, Vec<i64>) {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        let db = Database::new(pool, DEFAULT_QUERY_TIMEOUT);

        let legs = BodyPartRepository::new(db.clone())
            .create("Legs", "legs.png")
            .await
            .unwrap();
        let target_repo = TargetRepository::new(db.clone());
        let mut targets = Vec::new();
        for name in ["Quads", "Glutes", "Hamstrings"] {
            targets.push(target_repo.create(name, legs.id).await.unwrap().id);
        }

        let service = WorkoutService::new(WorkoutRepository::new(db), PayloadValidator::default());
        (service, legs.id, targets)
    }

    fn payload(body_part_id: i64, primary: i64, secondary: Vec<i64>) -> CreateWorkout {
        CreateWorkout {
            name: "Squat".to_string(),
            body_part_id,
            equipment_id: None,
            gif_url: String::new(),
            instructions: vec!["Squat down".to_string()],
            calories_burned: 100,
            duration_minutes: 20,
            difficulty: Difficulty::Advanced,
            primary_target: primary,
            secondary_targets: secondary,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (service, legs, targets) = setup().await;

        let created = service
            .create(payload(legs, targets[0], vec![targets[2], targets[1]]))
            .await
            .unwrap();
        let found = service.get(created.id).await.unwrap();

        assert_eq!(found.name, "Squat");
        assert_eq!(found.body_part, "Legs");
        assert_eq!(found.primary_target, "Quads");
        assert_eq!(found.secondary_targets, vec!["Hamstrings", "Glutes"]);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (service, _, _) = setup().await;

        assert!(matches!(
            service.get(9999).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_storage() {
        let (service, legs, targets) = setup().await;

        let result = service
            .create(payload(legs, targets[0], vec![targets[0]]))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(service.list().await.unwrap().is_empty());
    }
}
