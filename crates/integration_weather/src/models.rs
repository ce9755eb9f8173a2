//! Weather data models
//!
//! Types for representing weather data from Open-Meteo API. All times are
//! local to the timezone requested from the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Conditions at the time of the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time (local)
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Mean sea level pressure in hPa
    pub pressure: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: u8,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: u8,
    /// Precipitation in mm
    pub precipitation: f64,
}

/// One forecast hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    /// Forecast time (local)
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Mean sea level pressure in hPa
    pub pressure: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability: u8,
    /// WMO weather code
    pub weather_code: u8,
    /// Wind speed in km/h
    pub wind_speed: f64,
}

/// Current conditions plus the hourly forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalConditions {
    pub current: CurrentConditions,
    /// Hourly points in API order
    pub hourly: Vec<HourlyConditions>,
    /// Timezone the times are expressed in
    pub timezone: String,
}

// ============================================================================
// API response types (internal)
// ============================================================================

/// Raw API response from Open-Meteo
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub timezone: String,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
}

/// Current weather data from API
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub pressure_msl: f64,
    pub wind_speed_10m: f64,
    pub weather_code: u8,
    pub cloud_cover: f64,
    #[serde(default)]
    pub precipitation: f64,
}

/// Hourly forecast data from API, one array per variable
#[derive(Debug, Deserialize)]
pub(crate) struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub pressure_msl: Vec<f64>,
    /// Open-Meteo reports `null` where no probability is available
    pub precipitation_probability: Vec<Option<f64>>,
    pub weather_code: Vec<u8>,
    pub wind_speed_10m: Vec<f64>,
}
