//! Embedded database migrations
//!
//! The schema ships inside the binary; `_migrations` records which files
//! have been applied so restarts only run new ones.

use crate::db::DbPool;

/// All migrations in order, each as (filename, sql_content)
pub const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_body_parts.sql",
        include_str!("../migrations/001_create_body_parts.sql"),
    ),
    (
        "002_create_targets.sql",
        include_str!("../migrations/002_create_targets.sql"),
    ),
    (
        "003_create_equipment.sql",
        include_str!("../migrations/003_create_equipment.sql"),
    ),
    (
        "004_create_workouts.sql",
        include_str!("../migrations/004_create_workouts.sql"),
    ),
    (
        "005_create_workout_targets.sql",
        include_str!("../migrations/005_create_workout_targets.sql"),
    ),
];

/// Run all pending migrations on the database pool.
///
/// Each file is applied in its own transaction together with its
/// `_migrations` record.
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    tracing::info!("Running migrations...");

    let mut conn = pool.get()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    let mut applied = 0;
    for (filename, sql) in MIGRATIONS {
        let already_applied: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?",
            [filename],
            |row| row.get(0),
        )?;

        if already_applied {
            tracing::debug!("Skipping already applied migration: {}", filename);
            continue;
        }

        tracing::info!("Running migration: {}", filename);

        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.execute("INSERT INTO _migrations (name) VALUES (?)", [filename])?;
        tx.commit()?;
        applied += 1;
    }

    tracing::info!("Migrations completed ({} applied)", applied);
    Ok(())
}

/// Run all migrations without tracking, for fresh in-memory test databases.
pub fn run_migrations_for_tests(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    for (_filename, sql) in MIGRATIONS {
        conn.execute_batch(sql)?;
    }

    Ok(())
}
