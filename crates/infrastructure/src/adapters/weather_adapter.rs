//! Weather adapter - Implements WeatherPort using integration_weather

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{
    entities::{HourlyPoint, WeatherReading},
    value_objects::{GeoLocation, Percentage, WeatherCode, ZoneId},
};
use integration_weather::{
    HourlyConditions, LocalConditions, OpenMeteoClient, WeatherClient, WeatherConfig,
};
use tracing::{debug, instrument, warn};

use super::synthetic_weather::synthetic_reading;

/// Adapter for weather readings using the Open-Meteo API
///
/// Provider failures never surface as errors: the adapter logs them and
/// answers with a synthetic reading marked `is_live == false`.
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_hourly(hourly: &HourlyConditions) -> HourlyPoint {
        HourlyPoint {
            time: hourly.time,
            temperature: hourly.temperature,
            pressure: hourly.pressure,
            precipitation_probability: Percentage::clamped(hourly.precipitation_probability),
            weather_code: WeatherCode::new(hourly.weather_code),
            wind_speed: hourly.wind_speed,
        }
    }

    /// Convert provider conditions into a live reading taken at `now`
    ///
    /// Only hourly points strictly after `now` are kept.
    fn map_conditions(conditions: &LocalConditions, now: NaiveDateTime) -> WeatherReading {
        let current = &conditions.current;
        WeatherReading {
            observed_at: now,
            air_temperature: current.temperature,
            pressure: current.pressure,
            humidity: Percentage::clamped(current.humidity),
            wind_speed: current.wind_speed,
            weather_code: WeatherCode::new(current.weather_code),
            cloud_cover: Percentage::clamped(current.cloud_cover),
            precipitation: current.precipitation,
            hourly: conditions
                .hourly
                .iter()
                .filter(|h| h.time > now)
                .map(Self::map_hourly)
                .collect(),
            is_live: true,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(zone = %zone_id))]
    async fn current_conditions(
        &self,
        zone_id: &ZoneId,
        location: &GeoLocation,
        now: NaiveDateTime,
    ) -> Result<WeatherReading, ApplicationError> {
        match self
            .client
            .get_conditions(location.latitude(), location.longitude())
            .await
        {
            Ok(conditions) => {
                let reading = Self::map_conditions(&conditions, now);
                debug!(
                    air = reading.air_temperature,
                    code = %reading.weather_code,
                    hours = reading.hourly.len(),
                    "Live weather reading"
                );
                Ok(reading)
            },
            Err(e) => {
                warn!(error = %e, "Weather provider failed, using synthetic reading");
                Ok(synthetic_reading(zone_id, now))
            },
        }
    }
}
