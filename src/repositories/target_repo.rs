use rusqlite::OptionalExtension;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, PresentableTarget, Target};

const SELECT_PRESENTABLE: &str = "SELECT t.id, t.name, t.body_part_id, b.name AS body_part_name
     FROM targets t
     JOIN body_parts b ON t.body_part_id = b.id";

#[derive(Clone)]
pub struct TargetRepository {
    db: Database,
}

impl TargetRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts a target. A `body_part_id` with no matching body part fails
    /// with `MissingReference`.
    pub async fn create(&self, name: &str, body_part_id: i64) -> Result<Target> {
        let name = name.to_string();
        self.db
            .run(move |conn| {
                conn.execute(
                    "INSERT INTO targets (name, body_part_id) VALUES (?, ?)",
                    rusqlite::params![name, body_part_id],
                )?;
                Ok(Target {
                    id: conn.last_insert_rowid(),
                    name,
                    body_part_id,
                })
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PresentableTarget>> {
        self.db
            .run(move |conn| {
                let mut stmt = conn.prepare(&format!("{} WHERE t.id = ?", SELECT_PRESENTABLE))?;
                let result = stmt
                    .query_row([id], PresentableTarget::from_row)
                    .optional()?;
                Ok(result)
            })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<PresentableTarget>> {
        self.db
            .run(|conn| {
                let mut stmt = conn.prepare(&format!("{} ORDER BY t.id", SELECT_PRESENTABLE))?;
                let targets = stmt
                    .query_map([], PresentableTarget::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(targets)
            })
            .await
    }

    /// Writes name and owning body part back. The joined `body_part` name on
    /// the argument is ignored.
    pub async fn update(&self, target: &PresentableTarget) -> Result<()> {
        let target = target.clone();
        self.db
            .run(move |conn| {
                let rows = conn.execute(
                    "UPDATE targets SET name = ?, body_part_id = ? WHERE id = ?",
                    rusqlite::params![target.name, target.body_part_id, target.id],
                )?;
                if rows == 0 {
                    return Err(AppError::NotFound("target not found".to_string()));
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.db
            .run(move |conn| {
                let rows = conn
                    .execute("DELETE FROM targets WHERE id = ?", [id])
                    .map_err(|e| AppError::from(e).still_referenced("target"))?;
                if rows == 0 {
                    return Err(AppError::NotFound("target not found".to_string()));
                }
                Ok(())
            })
            .await
    }
}
