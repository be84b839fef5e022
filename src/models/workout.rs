use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::from_row::json_column;
use super::FromSqliteRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl ToSql for Difficulty {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Difficulty {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Difficulty::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown difficulty {:?}", s).into()))
    }
}

/// Role a target plays in a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Primary,
    Secondary,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Primary => "primary",
            LinkType::Secondary => "secondary",
        }
    }
}

impl ToSql for LinkType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for LinkType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "primary" => Ok(LinkType::Primary),
            "secondary" => Ok(LinkType::Secondary),
            other => Err(FromSqlError::Other(
                format!("unknown link type {:?}", other).into(),
            )),
        }
    }
}

/// A workout as stored, returned from create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    #[serde(rename = "bodypart_id")]
    pub body_part_id: i64,
    pub equipment_id: Option<i64>,
    pub gif_url: String,
    pub instructions: Vec<String>,
    pub calories_burned: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

/// Workout fields supplied by the caller; storage assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub name: String,
    pub body_part_id: i64,
    pub equipment_id: Option<i64>,
    pub gif_url: String,
    pub instructions: Vec<String>,
    pub calories_burned: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

impl NewWorkout {
    pub fn with_id(self, id: i64) -> Workout {
        Workout {
            id,
            name: self.name,
            body_part_id: self.body_part_id,
            equipment_id: self.equipment_id,
            gif_url: self.gif_url,
            instructions: self.instructions,
            calories_burned: self.calories_burned,
            duration_minutes: self.duration_minutes,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateWorkout {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[serde(rename = "bodypart_id")]
    #[validate(range(min = 1))]
    pub body_part_id: i64,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub equipment_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub gif_url: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    #[validate(range(max = 10000))]
    pub calories_burned: u32,
    #[serde(default)]
    #[validate(range(max = 1440))]
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    #[validate(range(min = 1))]
    pub primary_target: i64,
    #[serde(default)]
    pub secondary_targets: Vec<i64>,
}

impl CreateWorkout {
    /// Splits the payload into the workout row and its target ids.
    pub fn into_parts(self) -> (NewWorkout, i64, Vec<i64>) {
        let workout = NewWorkout {
            name: self.name,
            body_part_id: self.body_part_id,
            equipment_id: self.equipment_id,
            gif_url: self.gif_url,
            instructions: self.instructions,
            calories_burned: self.calories_burned,
            duration_minutes: self.duration_minutes,
            difficulty: self.difficulty,
        };
        (workout, self.primary_target, self.secondary_targets)
    }
}

/// Read-side view of a workout with every reference resolved to a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentableWorkout {
    pub id: i64,
    pub name: String,
    pub gif_url: String,
    pub instructions: Vec<String>,
    pub calories_burned: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub body_part: String,
    pub equipment: Option<String>,
    pub primary_target: String,
    pub secondary_targets: Vec<String>,
}

/// Joined workout row before its target links are attached.
#[derive(Debug, Clone)]
pub struct WorkoutRow {
    pub id: i64,
    pub name: String,
    pub gif_url: String,
    pub instructions: Vec<String>,
    pub calories_burned: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub body_part: String,
    pub equipment: Option<String>,
}

impl FromSqliteRow for WorkoutRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            gif_url: row.get("gif_url")?,
            instructions: json_column(row, "instructions")?,
            calories_burned: row.get("calories_burned")?,
            duration_minutes: row.get("duration_minutes")?,
            difficulty: row.get("difficulty")?,
            body_part: row.get("body_part_name")?,
            equipment: row.get("equipment_name")?,
        })
    }
}

impl WorkoutRow {
    pub fn present(
        self,
        primary_target: String,
        secondary_targets: Vec<String>,
    ) -> PresentableWorkout {
        PresentableWorkout {
            id: self.id,
            name: self.name,
            gif_url: self.gif_url,
            instructions: self.instructions,
            calories_burned: self.calories_burned,
            duration_minutes: self.duration_minutes,
            difficulty: self.difficulty,
            body_part: self.body_part,
            equipment: self.equipment,
            primary_target,
            secondary_targets,
        }
    }
}
