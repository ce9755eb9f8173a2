//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Open-Meteo weather adapter, thermal state stores,
//! configuration loading and the catalog loader.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod persistence;

use std::sync::Arc;

use application::ports::ThermalStateStore;
use tracing::info;

pub use adapters::*;
pub use catalog::{CatalogError, LOMBARDIA_CATALOG, load_catalog, parse_catalog};
pub use config::{
    AppConfig, CatalogConfig, DatabaseConfig, LoggingConfig, StorageBackend, ThermalConfig,
};
pub use persistence::{ConnectionPool, DatabaseError, SqliteThermalStateStore, create_pool};

/// Open the thermal state store selected by the configuration
pub fn open_thermal_store(
    config: &DatabaseConfig,
) -> Result<Arc<dyn ThermalStateStore>, DatabaseError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory thermal state store");
            Ok(Arc::new(InMemoryThermalStateStore::new()))
        },
        StorageBackend::Sqlite => {
            let pool = create_pool(config)?;
            Ok(Arc::new(SqliteThermalStateStore::new(Arc::new(pool))))
        },
    }
}
