use rusqlite::OptionalExtension;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{Equipment, FromSqliteRow};

#[derive(Clone)]
pub struct EquipmentRepository {
    db: Database,
}

impl EquipmentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<Equipment> {
        let name = name.to_string();
        self.db
            .run(move |conn| {
                conn.execute("INSERT INTO equipment (name) VALUES (?)", [&name])?;
                Ok(Equipment {
                    id: conn.last_insert_rowid(),
                    name,
                })
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Equipment>> {
        self.db
            .run(move |conn| {
                let mut stmt = conn.prepare("SELECT id, name FROM equipment WHERE id = ?")?;
                let result = stmt.query_row([id], Equipment::from_row).optional()?;
                Ok(result)
            })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<Equipment>> {
        self.db
            .run(|conn| {
                let mut stmt = conn.prepare("SELECT id, name FROM equipment ORDER BY id")?;
                let equipment = stmt
                    .query_map([], Equipment::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(equipment)
            })
            .await
    }

    pub async fn update(&self, equipment: &Equipment) -> Result<()> {
        let equipment = equipment.clone();
        self.db
            .run(move |conn| {
                let rows = conn.execute(
                    "UPDATE equipment SET name = ? WHERE id = ?",
                    rusqlite::params![equipment.name, equipment.id],
                )?;
                if rows == 0 {
                    return Err(AppError::NotFound("equipment not found".to_string()));
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.db
            .run(move |conn| {
                let rows = conn
                    .execute("DELETE FROM equipment WHERE id = ?", [id])
                    .map_err(|e| AppError::from(e).still_referenced("equipment"))?;
                if rows == 0 {
                    return Err(AppError::NotFound("equipment not found".to_string()));
                }
                Ok(())
            })
            .await
    }
}
