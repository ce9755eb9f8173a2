//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Weather API.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    ApiResponse, CurrentConditions, CurrentData, HourlyConditions, HourlyData, LocalConditions,
};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,pressure_msl,wind_speed_10m,\
                              weather_code,cloud_cover,precipitation";
const HOURLY_FIELDS: &str =
    "temperature_2m,pressure_msl,precipitation_probability,weather_code,wind_speed_10m";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days for the hourly series (1-16, default: 2)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// IANA timezone the API reports local times in (default: Europe/Rome)
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    2
}

fn default_timezone() -> String {
    "Europe/Rome".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
            timezone: default_timezone(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and the hourly forecast for a location
    async fn get_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocalConditions, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a conditions request
    ///
    /// Wind is requested in km/h explicitly; the thermal model thresholds
    /// are expressed in km/h.
    fn build_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            concat!(
                "{}/forecast?latitude={}&longitude={}&current={}&hourly={}",
                "&wind_speed_unit=kmh&timezone={}&forecast_days={}"
            ),
            self.config.base_url,
            latitude,
            longitude,
            CURRENT_FIELDS,
            HOURLY_FIELDS,
            self.config.timezone,
            self.config.forecast_days.clamp(1, 16)
        )
    }

    /// Parse current conditions from API response
    fn parse_current(data: &CurrentData) -> Result<CurrentConditions, WeatherError> {
        Ok(CurrentConditions {
            time: Self::parse_datetime(&data.time)?,
            temperature: data.temperature_2m,
            humidity: to_percent(data.relative_humidity_2m),
            pressure: data.pressure_msl,
            wind_speed: data.wind_speed_10m,
            weather_code: data.weather_code,
            cloud_cover: to_percent(data.cloud_cover),
            precipitation: data.precipitation,
        })
    }

    /// Parse the hourly series, which must have one value per timestamp
    fn parse_hourly(data: &HourlyData) -> Result<Vec<HourlyConditions>, WeatherError> {
        let len = data.time.len();
        let lengths = [
            data.temperature_2m.len(),
            data.pressure_msl.len(),
            data.precipitation_probability.len(),
            data.weather_code.len(),
            data.wind_speed_10m.len(),
        ];
        if lengths.iter().any(|&l| l != len) {
            return Err(WeatherError::ParseError(format!(
                "Hourly series lengths differ: time={len}, others={lengths:?}"
            )));
        }

        data.time
            .iter()
            .enumerate()
            .map(|(i, time)| {
                Ok(HourlyConditions {
                    time: Self::parse_datetime(time)?,
                    temperature: data.temperature_2m[i],
                    pressure: data.pressure_msl[i],
                    precipitation_probability: data.precipitation_probability[i]
                        .map_or(0, to_percent),
                    weather_code: data.weather_code[i],
                    wind_speed: data.wind_speed_10m[i],
                })
            })
            .collect()
    }

    /// Parse a local ISO 8601 timestamp (`2025-07-15T14:00`)
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, WeatherError> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|_| WeatherError::ParseError(format!("Invalid datetime format: {s}")))
    }
}

/// Round and clamp an API percentage into 0-100
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocalConditions, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_url(latitude, longitude);
        debug!(url = %url, "Fetching weather conditions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current_data = api_response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;
        let current = Self::parse_current(&current_data)?;
        let hourly = match api_response.hourly {
            Some(data) => Self::parse_hourly(&data)?,
            None => Vec::new(),
        };

        debug!(hours = hourly.len(), "Parsed weather conditions");

        Ok(LocalConditions {
            current,
            hourly,
            timezone: api_response.timezone,
        })
    }
}
