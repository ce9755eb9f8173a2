//! Thermal state storage port
//!
//! Persists the per zone and month thermal memory of the water temperature
//! estimator.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::entities::{ThermalKey, ThermalState};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for thermal state persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ThermalStateStore: Send + Sync {
    /// Get the state for a key, `None` on first observation
    async fn load(&self, key: &ThermalKey) -> Result<Option<ThermalState>, ApplicationError>;

    /// Insert or replace the state for a key
    async fn save(&self, key: &ThermalKey, state: &ThermalState) -> Result<(), ApplicationError>;

    /// Delete every state last updated before `cutoff`
    ///
    /// # Returns
    /// The number of states deleted
    async fn prune_older_than(&self, cutoff: NaiveDate) -> Result<u64, ApplicationError>;
}
