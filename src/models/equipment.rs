use rusqlite::Row;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
}

impl FromSqliteRow for Equipment {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, max = 40))]
    pub name: Option<String>,
}

impl UpdateEquipment {
    pub fn apply(self, equipment: &mut Equipment) {
        if let Some(name) = self.name {
            equipment.name = name;
        }
    }
}
