use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Transaction};

use crate::error::{AppError, Result};

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Upper bound applied to every storage call.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);
const MIN_QUERY_TIMEOUT: Duration = Duration::from_millis(1);

pub fn create_pool(
    database_url: &str,
    max_size: u32,
    query_timeout: Duration,
) -> std::result::Result<DbPool, r2d2::Error> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    // Remove query parameters (e.g., ?mode=rwc)
    let path = path.split('?').next().unwrap_or(path);

    let manager = if path == ":memory:" {
        SqliteConnectionManager::memory()
    } else {
        SqliteConnectionManager::file(Path::new(path))
    };

    // Every in-memory connection is its own database, so the pool must not grow.
    let max_size = if path == ":memory:" { 1 } else { max_size.max(1) };
    // r2d2 rejects a zero checkout timeout.
    let query_timeout = query_timeout.max(MIN_QUERY_TIMEOUT);

    Pool::builder()
        .max_size(max_size)
        .connection_timeout(query_timeout)
        .build(manager.with_init(move |conn| init_connection(conn, query_timeout)))
}

pub fn create_memory_pool() -> std::result::Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| init_connection(conn, DEFAULT_QUERY_TIMEOUT));
    Pool::builder().max_size(1).build(manager)
}

fn init_connection(conn: &mut Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

/// Pooled SQLite handle shared by the repositories.
///
/// Statements run on the blocking thread pool; the async side waits at most
/// `query_timeout` for them to finish.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    query_timeout: Duration,
}

impl Database {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Checks out a connection and runs `f` on it off the async runtime.
    pub async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DbConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let task = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        });

        match tokio::time::timeout(self.query_timeout, task).await {
            Ok(joined) => joined.map_err(|e| AppError::Internal(e.to_string()))?,
            Err(_) => {
                tracing::warn!("Storage call exceeded {:?}", self.query_timeout);
                Err(AppError::Timeout)
            }
        }
    }
}

/// Runs `f` inside a transaction, committing only if it succeeds.
///
/// Dropping the uncommitted transaction on the error path rolls it back.
pub fn with_tx<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction<'_>) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
