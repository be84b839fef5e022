use rusqlite::OptionalExtension;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{BodyPart, FromSqliteRow};

#[derive(Clone)]
pub struct BodyPartRepository {
    db: Database,
}

impl BodyPartRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, image_url: &str) -> Result<BodyPart> {
        let name = name.to_string();
        let image_url = image_url.to_string();
        self.db
            .run(move |conn| {
                conn.execute(
                    "INSERT INTO body_parts (name, image_url) VALUES (?, ?)",
                    rusqlite::params![name, image_url],
                )?;
                Ok(BodyPart {
                    id: conn.last_insert_rowid(),
                    name,
                    image_url,
                })
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<BodyPart>> {
        self.db
            .run(move |conn| {
                let mut stmt = conn.prepare("SELECT * FROM body_parts WHERE id = ?")?;
                let result = stmt.query_row([id], BodyPart::from_row).optional()?;
                Ok(result)
            })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<BodyPart>> {
        self.db
            .run(|conn| {
                let mut stmt = conn.prepare("SELECT * FROM body_parts ORDER BY id")?;
                let body_parts = stmt
                    .query_map([], BodyPart::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(body_parts)
            })
            .await
    }

    pub async fn update(&self, body_part: &BodyPart) -> Result<()> {
        let body_part = body_part.clone();
        self.db
            .run(move |conn| {
                let rows = conn.execute(
                    "UPDATE body_parts SET name = ?, image_url = ? WHERE id = ?",
                    rusqlite::params![body_part.name, body_part.image_url, body_part.id],
                )?;
                if rows == 0 {
                    return Err(AppError::NotFound("body part not found".to_string()));
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.db
            .run(move |conn| {
                let rows = conn
                    .execute("DELETE FROM body_parts WHERE id = ?", [id])
                    .map_err(|e| AppError::from(e).still_referenced("body part"))?;
                if rows == 0 {
                    return Err(AppError::NotFound("body part not found".to_string()));
                }
                Ok(())
            })
            .await
    }
}
