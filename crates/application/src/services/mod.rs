//! Application services - Use case implementations

mod forecast_service;
mod water_temperature_service;

pub use forecast_service::{CalendarRow, ForecastService, ZoneReport};
pub use water_temperature_service::{
    WaterEstimate, WaterTemperatureService, DEFAULT_RETENTION_DAYS,
};
