//! Thermal state - Per zone and month memory of accumulated heat

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::ZoneId};

/// Storage key of a thermal state: one zone in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ThermalKey {
    pub zone: ZoneId,
    /// Calendar month, 1 = January
    pub month: u32,
}

impl ThermalKey {
    #[must_use]
    pub const fn new(zone: ZoneId, month: u32) -> Self {
        Self { zone, month }
    }
}

/// Formats as `zone:month`, the key used by persistent stores
impl fmt::Display for ThermalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.zone, self.month)
    }
}

impl FromStr for ThermalKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (zone, month) = s.rsplit_once(':').ok_or_else(|| {
            DomainError::ValidationError(format!("thermal key '{s}' is not zone:month"))
        })?;
        let month: u32 = month.parse().map_err(|_| {
            DomainError::ValidationError(format!("thermal key '{s}' has a bad month"))
        })?;
        if !(1..=12).contains(&month) {
            return Err(DomainError::ValidationError(format!(
                "thermal key '{s}' month is out of range"
            )));
        }
        Ok(Self::new(ZoneId::new(zone)?, month))
    }
}

/// Accumulated thermal memory of one zone in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalState {
    /// Last estimated water temperature, unrounded
    pub current_estimated_temp: f64,
    /// Signed heat offset, bounded to ±8
    pub heat_accumulation: f64,
    pub last_update_date: NaiveDate,
    pub last_air_temp: f64,
    pub seasonal_base: f64,
    /// Water temperature the first update of `last_update_date` started from
    pub day_start_temp: f64,
    /// Heat accumulation the first update of `last_update_date` started from
    pub day_start_heat: f64,
}

impl ThermalState {
    /// Whether the state was last updated more than `retention_days` before `today`
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate, retention_days: i64) -> bool {
        (today - self.last_update_date).num_days() > retention_days
    }
}
