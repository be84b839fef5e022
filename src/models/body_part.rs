use rusqlite::Row;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    pub id: i64,
    pub name: String,
    pub image_url: String,
}

impl FromSqliteRow for BodyPart {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            image_url: row.get("image_url")?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBodyPart {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub image_url: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateBodyPart {
    #[validate(length(min = 1, max = 40))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub image_url: Option<String>,
}

impl UpdateBodyPart {
    pub fn apply(self, body_part: &mut BodyPart) {
        if let Some(name) = self.name {
            body_part.name = name;
        }
        if let Some(image_url) = self.image_url {
            body_part.image_url = image_url;
        }
    }
}
