use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension};

use crate::db::{with_tx, Database};
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, LinkType, NewWorkout, PresentableWorkout, Workout, WorkoutRow};

const SELECT_WORKOUT_ROW: &str = "SELECT w.id, w.name, w.gif_url, w.instructions, w.calories_burned,
            w.duration_minutes, w.difficulty,
            b.name AS body_part_name, e.name AS equipment_name
     FROM workouts w
     JOIN body_parts b ON w.body_part_id = b.id
     LEFT JOIN equipment e ON w.equipment_id = e.id";

/// Linking goes through a SELECT on `targets` so that an unknown target id
/// inserts nothing instead of relying on the foreign key error.
const LINK_TARGET: &str = "INSERT INTO workout_targets (workout_id, target_id, type, position)
     SELECT ?1, t.id, ?3, ?4 FROM targets t WHERE t.id = ?2";

#[derive(Clone)]
pub struct WorkoutRepository {
    db: Database,
}

impl WorkoutRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts the workout and its target links in one transaction.
    ///
    /// The primary link is written first, then one secondary link per id in
    /// the order given. Any failure rolls everything back, so no workout
    /// exists without its links.
    pub async fn create_and_link_targets(
        &self,
        workout: NewWorkout,
        primary_target_id: i64,
        secondary_target_ids: Vec<i64>,
    ) -> Result<Workout> {
        self.db
            .run(move |conn| {
                with_tx(conn, |tx| {
                    let id = insert_workout(tx, &workout)?;
                    link_targets(tx, id, primary_target_id, &secondary_target_ids)?;
                    Ok(id)
                })
                .map(|id| workout.with_id(id))
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PresentableWorkout>> {
        self.db
            .run(move |conn| {
                let Some(row) = query_workout_row(conn, id)? else {
                    return Ok(None);
                };

                let (primary, secondary) = find_target_names(conn, row.id)?;
                Ok(Some(present(row, primary, secondary)?))
            })
            .await
    }

    /// Every workout in id order. Target links for all of them are loaded
    /// with a single query and grouped in memory.
    pub async fn find_all(&self) -> Result<Vec<PresentableWorkout>> {
        self.db
            .run(|conn| {
                let rows = query_workout_rows(conn)?;
                let mut links = find_all_target_names(conn)?;

                rows.into_iter()
                    .map(|row| {
                        let (primary, secondary) = links.remove(&row.id).unwrap_or_default();
                        present(row, primary, secondary)
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .await
    }
}

fn query_workout_row(conn: &Connection, id: i64) -> Result<Option<WorkoutRow>> {
    let mut stmt = conn.prepare(&format!("{} WHERE w.id = ?", SELECT_WORKOUT_ROW))?;
    let row = stmt.query_row([id], WorkoutRow::from_row).optional()?;
    Ok(row)
}

fn query_workout_rows(conn: &Connection) -> Result<Vec<WorkoutRow>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY w.id", SELECT_WORKOUT_ROW))?;
    let rows = stmt
        .query_map([], WorkoutRow::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn insert_workout(conn: &Connection, workout: &NewWorkout) -> Result<i64> {
    let instructions = serde_json::to_string(&workout.instructions)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    conn.execute(
        "INSERT INTO workouts
            (name, body_part_id, equipment_id, gif_url, instructions,
             calories_burned, duration_minutes, difficulty)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        rusqlite::params![
            workout.name,
            workout.body_part_id,
            workout.equipment_id,
            workout.gif_url,
            instructions,
            workout.calories_burned,
            workout.duration_minutes,
            workout.difficulty,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

fn link_targets(
    conn: &Connection,
    workout_id: i64,
    primary_target_id: i64,
    secondary_target_ids: &[i64],
) -> Result<()> {
    let mut stmt = conn.prepare(LINK_TARGET)?;

    let mut link = |target_id: i64, link_type: LinkType, position: i64| -> Result<()> {
        let rows = stmt.execute(rusqlite::params![
            workout_id,
            target_id,
            link_type,
            position
        ])?;
        if rows == 0 {
            return Err(AppError::MissingReference(format!(
                "target {} does not exist",
                target_id
            )));
        }
        Ok(())
    };

    link(primary_target_id, LinkType::Primary, 0)?;
    for (position, &target_id) in secondary_target_ids.iter().enumerate() {
        link(target_id, LinkType::Secondary, position as i64)?;
    }

    tracing::debug!(
        "Linked workout {} to {} target(s)",
        workout_id,
        secondary_target_ids.len() + 1
    );
    Ok(())
}

/// Primary target name (if linked) and secondary names in link order.
type TargetNames = (Option<String>, Vec<String>);

fn find_target_names(conn: &Connection, workout_id: i64) -> Result<TargetNames> {
    let mut stmt = conn.prepare(
        "SELECT t.name, wt.type
         FROM workout_targets wt
         JOIN targets t ON t.id = wt.target_id
         WHERE wt.workout_id = ?
         ORDER BY wt.type, wt.position",
    )?;
    let mut rows = stmt.query([workout_id])?;

    let mut names = TargetNames::default();
    while let Some(row) = rows.next()? {
        push_target(&mut names, row.get(0)?, row.get(1)?);
    }
    Ok(names)
}

fn find_all_target_names(conn: &Connection) -> Result<HashMap<i64, TargetNames>> {
    let mut stmt = conn.prepare(
        "SELECT wt.workout_id, t.name, wt.type
         FROM workout_targets wt
         JOIN targets t ON t.id = wt.target_id
         ORDER BY wt.workout_id, wt.type, wt.position",
    )?;
    let mut rows = stmt.query([])?;

    let mut by_workout: HashMap<i64, TargetNames> = HashMap::new();
    while let Some(row) = rows.next()? {
        let names = by_workout.entry(row.get(0)?).or_default();
        push_target(names, row.get(1)?, row.get(2)?);
    }
    Ok(by_workout)
}

fn push_target(names: &mut TargetNames, name: String, link_type: LinkType) {
    match link_type {
        LinkType::Primary => names.0 = Some(name),
        LinkType::Secondary => names.1.push(name),
    }
}

/// A workout without a primary link was never written by
/// `create_and_link_targets`; refuse to present it.
fn present(
    row: WorkoutRow,
    primary: Option<String>,
    secondary: Vec<String>,
) -> Result<PresentableWorkout> {
    let primary = primary.ok_or_else(|| {
        AppError::Integrity(format!("workout {} has no primary target", row.id))
    })?;
    Ok(row.present(primary, secondary))
}
