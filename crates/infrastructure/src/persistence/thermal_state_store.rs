//! SQLite-based thermal state persistence

use std::sync::Arc;

use application::{error::ApplicationError, ports::ThermalStateStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::entities::{ThermalKey, ThermalState};
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-based thermal state store
#[derive(Debug, Clone)]
pub struct SqliteThermalStateStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteThermalStateStore {
    /// Create a new SQLite thermal state store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThermalStateStore for SqliteThermalStateStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn load(&self, key: &ThermalKey) -> Result<Option<ThermalState>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.query_row(
                "SELECT current_estimated_temp, heat_accumulation, last_update_date,
                        last_air_temp, seasonal_base, day_start_temp, day_start_heat
                 FROM thermal_states WHERE key = ?1",
                [&key],
                row_to_state,
            )
            .optional()
            .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, state), fields(key = %key))]
    async fn save(&self, key: &ThermalKey, state: &ThermalState) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.clone();
        let state = state.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.execute(
                "INSERT INTO thermal_states (
                    key, zone, month, current_estimated_temp, heat_accumulation,
                    last_update_date, last_air_temp, seasonal_base,
                    day_start_temp, day_start_heat
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                ON CONFLICT(key) DO UPDATE SET
                    current_estimated_temp = excluded.current_estimated_temp,
                    heat_accumulation = excluded.heat_accumulation,
                    last_update_date = excluded.last_update_date,
                    last_air_temp = excluded.last_air_temp,
                    seasonal_base = excluded.seasonal_base,
                    day_start_temp = excluded.day_start_temp,
                    day_start_heat = excluded.day_start_heat",
                params![
                    key.to_string(),
                    key.zone.as_str(),
                    key.month,
                    state.current_estimated_temp,
                    state.heat_accumulation,
                    state.last_update_date.format(DATE_FORMAT).to_string(),
                    state.last_air_temp,
                    state.seasonal_base,
                    state.day_start_temp,
                    state.day_start_heat,
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Saved thermal state");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn prune_older_than(&self, cutoff: NaiveDate) -> Result<u64, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let cutoff = cutoff.format(DATE_FORMAT).to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let deleted = conn
                .execute(
                    "DELETE FROM thermal_states WHERE last_update_date < ?1",
                    [&cutoff],
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(deleted as u64)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

fn row_to_state(row: &Row<'_>) -> rusqlite::Result<ThermalState> {
    let date: String = row.get(2)?;
    let last_update_date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(ThermalState {
        current_estimated_temp: row.get(0)?,
        heat_accumulation: row.get(1)?,
        last_update_date,
        last_air_temp: row.get(3)?,
        seasonal_base: row.get(4)?,
        day_start_temp: row.get(5)?,
        day_start_heat: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use domain::value_objects::ZoneId;

    use super::*;
    use crate::{config::DatabaseConfig, persistence::create_pool};

    fn store() -> SqliteThermalStateStore {
        let config = DatabaseConfig {
            path: ":memory:".to_string(),
            ..DatabaseConfig::default()
        };
        SqliteThermalStateStore::new(Arc::new(create_pool(&config).unwrap()))
    }

    fn key(zone: &str, month: u32) -> ThermalKey {
        ThermalKey::new(ZoneId::new(zone).unwrap(), month)
    }

    fn state(date: NaiveDate, water: f64) -> ThermalState {
        ThermalState {
            current_estimated_temp: water,
            heat_accumulation: 1.25,
            last_update_date: date,
            last_air_temp: 24.0,
            seasonal_base: 20.5,
            day_start_temp: water - 0.5,
            day_start_heat: 1.0,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        assert!(store().load(&key("oleggio", 7)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = store();
        let saved = state(day(15), 21.5);
        store.save(&key("oleggio", 7), &saved).await.unwrap();

        let loaded = store.load(&key("oleggio", 7)).await.unwrap();
        assert_eq!(loaded, Some(saved));
    }

    #[tokio::test]
    async fn save_replaces_existing() {
        let store = store();
        store.save(&key("oleggio", 7), &state(day(14), 21.0)).await.unwrap();
        store.save(&key("oleggio", 7), &state(day(15), 21.8)).await.unwrap();

        let loaded = store.load(&key("oleggio", 7)).await.unwrap().unwrap();
        assert_eq!(loaded.last_update_date, day(15));
        assert!((loaded.current_estimated_temp - 21.8).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn keys_are_per_zone_and_month() {
        let store = store();
        store.save(&key("oleggio", 7), &state(day(15), 21.5)).await.unwrap();

        assert!(store.load(&key("oleggio", 8)).await.unwrap().is_none());
        assert!(store.load(&key("varese", 7)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn prune_deletes_only_older_states() {
        let store = store();
        store.save(&key("oleggio", 7), &state(day(1), 20.0)).await.unwrap();
        store.save(&key("varese", 7), &state(day(10), 23.0)).await.unwrap();
        store.save(&key("maggiore", 7), &state(day(20), 21.0)).await.unwrap();

        let deleted = store.prune_older_than(day(10)).await.unwrap();

        assert_eq!(deleted, 1);
        assert!(store.load(&key("oleggio", 7)).await.unwrap().is_none());
        assert!(store.load(&key("varese", 7)).await.unwrap().is_some());
        assert!(store.load(&key("maggiore", 7)).await.unwrap().is_some());
    }
}
