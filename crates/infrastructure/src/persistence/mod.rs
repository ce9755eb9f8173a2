//! Persistence module
//!
//! SQLite-based storage for the thermal memory of the water temperature
//! estimator.

pub mod connection;
pub mod migrations;
mod thermal_state_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use thermal_state_store::SqliteThermalStateStore;
