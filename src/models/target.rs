use rusqlite::Row;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: i64,
    pub name: String,
    #[serde(rename = "bodypart_id")]
    pub body_part_id: i64,
}

/// A target joined with the name of the body part it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentableTarget {
    pub id: i64,
    pub name: String,
    #[serde(rename = "bodypart_id")]
    pub body_part_id: i64,
    pub body_part: String,
}

impl FromSqliteRow for PresentableTarget {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            body_part_id: row.get("body_part_id")?,
            body_part: row.get("body_part_name")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTarget {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[serde(rename = "bodypart_id")]
    #[validate(range(min = 1))]
    pub body_part_id: i64,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateTarget {
    #[validate(length(min = 1, max = 40))]
    pub name: Option<String>,
    #[serde(rename = "bodypart_id")]
    #[validate(range(min = 1))]
    pub body_part_id: Option<i64>,
}

impl UpdateTarget {
    pub fn apply(self, target: &mut PresentableTarget) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(body_part_id) = self.body_part_id {
            target.body_part_id = body_part_id;
        }
    }
}
