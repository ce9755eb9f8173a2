//! Database migrations
//!
//! Manages database schema versioning and migrations.
//!
//! ## Adding New Migrations
//!
//! 1. Increment `SCHEMA_VERSION`
//! 2. Add a new `migrate_vX` function
//! 3. Update `run_migrations` to call the new function

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            from_version = current_version,
            to_version = SCHEMA_VERSION,
            "Running database migrations"
        );

        if current_version < 1 {
            if let Err(e) = migrate_v1(conn) {
                error!(version = 1, error = %e, "Migration V001 (thermal states) failed");
                return Err(e);
            }
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!(version = SCHEMA_VERSION, "Database migrations complete");
    } else {
        debug!(version = current_version, "Database schema is up to date");
    }

    Ok(())
}

/// Get current schema version
fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration to version 1: thermal memory per zone and month
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: thermal states");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS thermal_states (
            key TEXT PRIMARY KEY,
            zone TEXT NOT NULL,
            month INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            current_estimated_temp REAL NOT NULL,
            heat_accumulation REAL NOT NULL,
            last_update_date TEXT NOT NULL,
            last_air_temp REAL NOT NULL,
            seasonal_base REAL NOT NULL,
            day_start_temp REAL NOT NULL,
            day_start_heat REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_thermal_states_updated
            ON thermal_states(last_update_date);
        ",
    )?;

    Ok(())
}
