use std::collections::HashSet;

use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::CreateWorkout;

/// Request payload checks, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct PayloadValidator {
    max_secondary_targets: usize,
}

impl PayloadValidator {
    pub fn new(max_secondary_targets: usize) -> Self {
        Self {
            max_secondary_targets,
        }
    }

    /// Runs the field rules declared on the payload type.
    pub fn check<T: Validate>(&self, payload: &T) -> Result<()> {
        payload.validate()?;
        Ok(())
    }

    /// Field rules plus the target list rules of a workout: bounded length,
    /// no repeated ids, and the primary target not listed again as secondary.
    pub fn check_workout(&self, payload: &CreateWorkout) -> Result<()> {
        self.check(payload)?;

        if payload.secondary_targets.len() > self.max_secondary_targets {
            return Err(AppError::Validation(format!(
                "secondary_targets: at most {} allowed",
                self.max_secondary_targets
            )));
        }

        let mut seen = HashSet::with_capacity(payload.secondary_targets.len());
        for &id in &payload.secondary_targets {
            if id < 1 {
                return Err(AppError::Validation(format!(
                    "secondary_targets: invalid id {}",
                    id
                )));
            }
            if id == payload.primary_target {
                return Err(AppError::Validation(format!(
                    "secondary_targets: {} is already the primary target",
                    id
                )));
            }
            if !seen.insert(id) {
                return Err(AppError::Validation(format!(
                    "secondary_targets: {} listed twice",
                    id
                )));
            }
        }

        if payload.instructions.iter().any(|step| step.trim().is_empty()) {
            return Err(AppError::Validation(
                "instructions: steps must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PayloadValidator {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateBodyPart, Difficulty};

    fn payload(primary: i64, secondary: Vec<i64>) -> CreateWorkout {
        CreateWorkout {
            name: "Bench Press".to_string(),
            body_part_id: 1,
            equipment_id: Some(1),
            gif_url: String::new(),
            instructions: vec!["Lie down".to_string(), "Press".to_string()],
            calories_burned: 50,
            duration_minutes: 10,
            difficulty: Difficulty::Intermediate,
            primary_target: primary,
            secondary_targets: secondary,
        }
    }

    #[test]
    fn test_accepts_valid_workout() {
        let validator = PayloadValidator::default();
        assert!(validator.check_workout(&payload(1, vec![3, 5, 2])).is_ok());
    }

    #[test]
    fn test_rejects_primary_repeated_as_secondary() {
        let validator = PayloadValidator::default();
        let err = validator.check_workout(&payload(3, vec![3])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_duplicate_secondary() {
        let validator = PayloadValidator::default();
        let err = validator.check_workout(&payload(1, vec![2, 2])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_too_many_secondary() {
        let validator = PayloadValidator::new(2);
        let err = validator.check_workout(&payload(1, vec![2, 3, 4])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_overlong_name() {
        let validator = PayloadValidator::default();
        let mut p = payload(1, vec![]);
        p.name = "x".repeat(41);
        assert!(matches!(
            validator.check_workout(&p),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_check_body_part_requires_name() {
        let validator = PayloadValidator::default();
        let body_part = CreateBodyPart {
            name: String::new(),
            image_url: "https://img".to_string(),
        };
        assert!(matches!(
            validator.check(&body_part),
            Err(AppError::Validation(_))
        ));
    }
}
