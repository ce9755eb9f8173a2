//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod in_memory_thermal_store;
mod synthetic_weather;
mod weather_adapter;

pub use in_memory_thermal_store::InMemoryThermalStateStore;
pub use synthetic_weather::synthetic_reading;
pub use weather_adapter::WeatherAdapter;
