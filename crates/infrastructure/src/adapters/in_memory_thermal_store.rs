//! In-memory thermal state store
//!
//! Used by tests and by `database.backend = "memory"`. States are lost when
//! the process exits.

use std::collections::HashMap;

use application::{error::ApplicationError, ports::ThermalStateStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::entities::{ThermalKey, ThermalState};
use parking_lot::RwLock;
use tracing::debug;

/// Thermal states kept in a process-local map
#[derive(Debug, Default)]
pub struct InMemoryThermalStateStore {
    states: RwLock<HashMap<ThermalKey, ThermalState>>,
}

impl InMemoryThermalStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored states
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.read().is_empty()
    }
}

#[async_trait]
impl ThermalStateStore for InMemoryThermalStateStore {
    async fn load(&self, key: &ThermalKey) -> Result<Option<ThermalState>, ApplicationError> {
        Ok(self.states.read().get(key).cloned())
    }

    async fn save(&self, key: &ThermalKey, state: &ThermalState) -> Result<(), ApplicationError> {
        self.states.write().insert(key.clone(), state.clone());
        Ok(())
    }

    async fn prune_older_than(&self, cutoff: NaiveDate) -> Result<u64, ApplicationError> {
        let mut states = self.states.write();
        let before = states.len();
        states.retain(|_, state| state.last_update_date >= cutoff);
        let pruned = (before - states.len()) as u64;
        if pruned > 0 {
            debug!(pruned, %cutoff, "Pruned in-memory thermal states");
        }
        Ok(pruned)
    }
}
