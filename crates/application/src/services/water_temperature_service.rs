//! Water temperature service
//!
//! Runs the thermal model against stored thermal memory. Read, estimate and
//! write for one (zone, month) key happen under a per-key async lock so
//! concurrent refreshes of the same zone never lose an update.

use std::{collections::HashMap, fmt, sync::Arc};

use chrono::{Datelike, Duration, Timelike};
use domain::{
    entities::{ThermalKey, WeatherReading, Zone},
    services::thermal::{ThermalInputs, ThermalModel, ThermalTrace},
};
use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ThermalStateStore};

/// Default number of days a thermal state is kept without updates
pub const DEFAULT_RETENTION_DAYS: i64 = 30;

/// Result of one water temperature estimate
#[derive(Debug, Clone, PartialEq)]
pub struct WaterEstimate {
    /// Estimated water temperature, one decimal
    pub water_temperature: f64,
    /// Intermediate values of the model
    pub trace: ThermalTrace,
    /// The updated state was written back
    pub persisted: bool,
}

/// Service estimating water temperature with persisted thermal memory
pub struct WaterTemperatureService {
    store: Arc<dyn ThermalStateStore>,
    model: ThermalModel,
    retention_days: i64,
    locks: Mutex<HashMap<ThermalKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl fmt::Debug for WaterTemperatureService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaterTemperatureService")
            .field("model", &self.model)
            .field("retention_days", &self.retention_days)
            .finish_non_exhaustive()
    }
}

impl WaterTemperatureService {
    /// Create a new service
    #[must_use]
    pub fn new(store: Arc<dyn ThermalStateStore>, model: ThermalModel) -> Self {
        Self {
            store,
            model,
            retention_days: DEFAULT_RETENTION_DAYS,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Override how long idle thermal states are kept
    #[must_use]
    pub const fn with_retention_days(mut self, days: i64) -> Self {
        self.retention_days = days;
        self
    }

    fn lock_for(&self, key: &ThermalKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(key.clone()).or_default())
    }

    /// Estimate the water temperature of a zone for a reading
    ///
    /// Only live readings update the stored state. Synthetic readings are
    /// estimated from whatever is stored but never written back.
    #[instrument(skip(self, zone, reading), fields(zone = %zone.id, live = reading.is_live))]
    pub async fn estimate(
        &self,
        zone: &Zone,
        reading: &WeatherReading,
    ) -> Result<WaterEstimate, ApplicationError> {
        let date = reading.observed_at.date();
        let month = date.month();
        let key = ThermalKey::new(zone.id.clone(), month);
        let inputs = ThermalInputs {
            air_temperature: reading.air_temperature,
            weather_code: reading.weather_code,
            wind_speed: reading.wind_speed,
            date,
            hour: reading.observed_at.hour(),
        };

        let lock = self.lock_for(&key);
        let _guard = lock.lock().await;

        let prior = self.store.load(&key).await?;
        let outcome = self.model.estimate(zone, month, prior.as_ref(), &inputs);
        debug!(
            %key,
            first_observation = prior.is_none(),
            heat = outcome.next_state.heat_accumulation,
            water = outcome.water_temperature,
            "Estimated water temperature"
        );

        if !reading.is_live {
            debug!(%key, "Synthetic reading, thermal state left untouched");
            return Ok(WaterEstimate {
                water_temperature: outcome.water_temperature,
                trace: outcome.trace,
                persisted: false,
            });
        }

        self.store.save(&key, &outcome.next_state).await?;
        let cutoff = date - Duration::days(self.retention_days);
        let pruned = self.store.prune_older_than(cutoff).await?;
        if pruned > 0 {
            debug!(pruned, %cutoff, "Pruned stale thermal states");
        }

        Ok(WaterEstimate {
            water_temperature: outcome.water_temperature,
            trace: outcome.trace,
            persisted: true,
        })
    }
}
