//! Database connection management
//!
//! Provides SQLite connection pooling via r2d2.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a new connection pool
///
/// `:memory:` gives every pooled connection its own private database, so
/// in-memory pools are capped at a single connection.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(
        path = %config.path,
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let (manager, max_size) = if config.path == ":memory:" {
        (SqliteConnectionManager::memory(), 1)
    } else {
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::Migration(format!("Failed to create database directory: {e}"))
                })?;
            }
        }
        (
            SqliteConnectionManager::file(&config.path)
                .with_init(|conn| conn.busy_timeout(std::time::Duration::from_secs(5))),
            config.max_connections.max(1),
        )
    };

    let pool = Pool::builder().max_size(max_size).build(manager)?;

    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    if config.run_migrations {
        let conn = pool.get()?;
        crate::persistence::migrations::run_migrations(&conn)?;
    }

    debug!("Database connection pool created successfully");
    Ok(pool)
}

/// Initialize database with basic settings
fn initialize_database(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )?;
    Ok(())
}
