use rusqlite::types::Type;
use rusqlite::Row;
use serde::de::DeserializeOwned;

pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Reads a TEXT column holding a JSON document.
pub(crate) fn json_column<T: DeserializeOwned>(row: &Row, name: &str) -> rusqlite::Result<T> {
    let raw: String = row.get(name)?;
    serde_json::from_str(&raw).map_err(|e| {
        let index = row.as_ref().column_index(name).unwrap_or_default();
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
    })
}
