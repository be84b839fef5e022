use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rusqlite::ffi;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A write pointed at a row that does not exist.
    #[error("Missing reference: {0}")]
    MissingReference(String),

    /// The row is still referenced elsewhere.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Stored data breaks an invariant the writers maintain.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Storage call timed out")]
    Timeout,

    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ffi_err, ref msg) = err {
            let detail = msg.clone().unwrap_or_default();
            match ffi_err.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    return AppError::Duplicate(detail);
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return AppError::MissingReference(detail);
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    /// Re-labels a foreign-key failure raised by a delete: the row is in use,
    /// not missing.
    pub fn still_referenced(self, what: &str) -> Self {
        match self {
            AppError::MissingReference(_) => {
                AppError::Conflict(format!("{} is still referenced", what))
            }
            other => other,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Duplicate(detail) => {
                tracing::debug!("Duplicate: {}", detail);
                (
                    StatusCode::CONFLICT,
                    "a resource with that name already exists".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MissingReference(detail) => {
                tracing::debug!("Missing reference: {}", detail);
                (
                    StatusCode::NOT_FOUND,
                    "referenced resource not found".to_string(),
                )
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BadRequest(detail) => {
                tracing::debug!("Bad request: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    "invalid payload check request body".to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Integrity(msg) => {
                tracing::error!("Integrity violation: {}", msg);
                internal()
            }
            AppError::Timeout => {
                tracing::error!("Storage call timed out");
                internal()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal()
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {:?}", e);
                internal()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "something went wrong".to_string(),
    )
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn constraint_error(sql_setup: &str, sql_fail: &str) -> AppError {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn.execute_batch(sql_setup).unwrap();
        conn.execute_batch(sql_fail).unwrap_err().into()
    }

    #[test]
    fn test_unique_violation_is_duplicate() {
        let err = constraint_error(
            "CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');",
            "INSERT INTO t VALUES ('a');",
        );
        assert!(matches!(err, AppError::Duplicate(_)));
    }

    #[test]
    fn test_foreign_key_violation_is_missing_reference() {
        let err = constraint_error(
            "CREATE TABLE p (id INTEGER PRIMARY KEY);
             CREATE TABLE c (p_id INTEGER REFERENCES p(id));",
            "INSERT INTO c VALUES (99);",
        );
        assert!(matches!(err, AppError::MissingReference(_)));
    }

    #[test]
    fn test_other_errors_stay_database() {
        let conn = Connection::open_in_memory().unwrap();
        let err: AppError = conn.execute_batch("SELECT * FROM nowhere").unwrap_err().into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_still_referenced_only_relabels_missing_reference() {
        let relabeled = AppError::MissingReference("fk".to_string()).still_referenced("body part");
        assert!(matches!(
            relabeled,
            AppError::Conflict(ref m) if m == "body part is still referenced"
        ));

        let untouched = AppError::NotFound("x".to_string()).still_referenced("body part");
        assert!(matches!(untouched, AppError::NotFound(_)));
    }
}
