//! Weather readings and the water-aware snapshot built from them

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Percentage, WeatherCode, ZoneId};

/// Precipitation above which a reading counts as rising water, in mm
pub const RISING_PRECIPITATION_MM: f64 = 2.0;
/// Probability above which an hour carries a rain warning
pub const RAIN_WARNING_PROBABILITY: u8 = 50;
/// Probability below which a clear hour is a good fishing window
pub const BEST_HOUR_PROBABILITY: u8 = 30;
/// Number of upcoming hours shown in the outlook
pub const OUTLOOK_HOURS: usize = 6;

/// One hourly forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Local time of the forecast hour
    pub time: NaiveDateTime,
    /// Air temperature in °C
    pub temperature: f64,
    /// Mean sea level pressure in hPa
    pub pressure: f64,
    pub precipitation_probability: Percentage,
    pub weather_code: WeatherCode,
    /// Wind speed in km/h
    pub wind_speed: f64,
}

impl HourlyPoint {
    /// Local clock time formatted as `HH:MM`
    #[must_use]
    pub fn clock(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    #[must_use]
    pub const fn is_rain_warning(&self) -> bool {
        self.precipitation_probability.value() > RAIN_WARNING_PROBABILITY
    }

    #[must_use]
    pub const fn is_best_window(&self) -> bool {
        self.precipitation_probability.value() < BEST_HOUR_PROBABILITY
            && self.weather_code.is_clear_sky()
    }
}

/// Raw provider output for one coordinate, before water estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Local time of the observation
    pub observed_at: NaiveDateTime,
    /// Air temperature in °C
    pub air_temperature: f64,
    /// Mean sea level pressure in hPa
    pub pressure: f64,
    pub humidity: Percentage,
    /// Wind speed in km/h
    pub wind_speed: f64,
    pub weather_code: WeatherCode,
    pub cloud_cover: Percentage,
    /// Precipitation in mm over the last hour
    pub precipitation: f64,
    /// Upcoming hourly points, ordered by time
    pub hourly: Vec<HourlyPoint>,
    /// `false` when the reading was synthesized after a provider failure
    pub is_live: bool,
}

/// Weather plus estimated water temperature for one zone at one instant
///
/// Only constructible through [`WeatherSnapshot::from_reading`], so the
/// water temperature is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    location_id: ZoneId,
    observed_at: NaiveDateTime,
    air_temperature: f64,
    water_temperature: f64,
    pressure: f64,
    humidity: Percentage,
    wind_speed: f64,
    weather_code: WeatherCode,
    cloud_cover: Percentage,
    precipitation: f64,
    is_live: bool,
    hourly_forecast: Vec<HourlyPoint>,
}

impl WeatherSnapshot {
    /// Combine a reading with the water temperature estimated from it
    #[must_use]
    pub fn from_reading(
        location_id: ZoneId,
        reading: WeatherReading,
        water_temperature: f64,
    ) -> Self {
        let mut hourly_forecast = reading.hourly;
        hourly_forecast.sort_by_key(|point| point.time);
        Self {
            location_id,
            observed_at: reading.observed_at,
            air_temperature: reading.air_temperature,
            water_temperature,
            pressure: reading.pressure,
            humidity: reading.humidity,
            wind_speed: reading.wind_speed,
            weather_code: reading.weather_code,
            cloud_cover: reading.cloud_cover,
            precipitation: reading.precipitation,
            is_live: reading.is_live,
            hourly_forecast,
        }
    }

    #[must_use]
    pub const fn location_id(&self) -> &ZoneId {
        &self.location_id
    }

    #[must_use]
    pub const fn observed_at(&self) -> NaiveDateTime {
        self.observed_at
    }

    #[must_use]
    pub const fn air_temperature(&self) -> f64 {
        self.air_temperature
    }

    #[must_use]
    pub const fn water_temperature(&self) -> f64 {
        self.water_temperature
    }

    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    #[must_use]
    pub const fn humidity(&self) -> Percentage {
        self.humidity
    }

    #[must_use]
    pub const fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    #[must_use]
    pub const fn weather_code(&self) -> WeatherCode {
        self.weather_code
    }

    #[must_use]
    pub const fn cloud_cover(&self) -> Percentage {
        self.cloud_cover
    }

    #[must_use]
    pub const fn precipitation(&self) -> f64 {
        self.precipitation
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.is_live
    }

    #[must_use]
    pub fn hourly_forecast(&self) -> &[HourlyPoint] {
        &self.hourly_forecast
    }

    /// Direction the water level is heading given current rain
    #[must_use]
    pub fn water_level_trend(&self) -> WaterLevelTrend {
        WaterLevelTrend::assess(self.weather_code, self.precipitation)
    }

    /// Next hourly points strictly after `now`
    #[must_use]
    pub fn hourly_outlook(&self, now: NaiveDateTime) -> HourlyOutlook {
        let hours: Vec<HourlyPoint> = self
            .hourly_forecast
            .iter()
            .filter(|point| point.time > now)
            .take(OUTLOOK_HOURS)
            .cloned()
            .collect();
        HourlyOutlook::new(hours)
    }
}

/// Expected short-term change of the water level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterLevelTrend {
    Rising,
    Stable,
    Falling,
}

impl WaterLevelTrend {
    /// Classify from the weather code and hourly precipitation in mm
    #[must_use]
    pub fn assess(code: WeatherCode, precipitation: f64) -> Self {
        if code.raises_water_level() || precipitation > RISING_PRECIPITATION_MM {
            Self::Rising
        } else if code.is_clear_sky() && precipitation <= 0.0 {
            Self::Falling
        } else {
            Self::Stable
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Stable => "Stable",
            Self::Falling => "Falling",
        }
    }
}

impl std::fmt::Display for WaterLevelTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Upcoming hours with rain warnings and best fishing windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyOutlook {
    pub hours: Vec<HourlyPoint>,
    /// Local times of hours with a high chance of rain
    pub rain_warnings: Vec<NaiveTime>,
    /// Local times of dry, clear hours
    pub best_hours: Vec<NaiveTime>,
}

impl HourlyOutlook {
    #[must_use]
    pub fn new(hours: Vec<HourlyPoint>) -> Self {
        let rain_warnings = hours
            .iter()
            .filter(|p| p.is_rain_warning())
            .map(|p| p.time.time())
            .collect();
        let best_hours = hours
            .iter()
            .filter(|p| p.is_best_window())
            .map(|p| p.time.time())
            .collect();
        Self {
            hours,
            rain_warnings,
            best_hours,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures::*, *};

    #[test]
    fn snapshot_sorts_hourly_points() {
        let mut r = reading(24.0, 1015.0, 0);
        r.hourly = vec![point(15, 10, 0), point(13, 10, 0), point(14, 10, 0)];
        let snapshot = WeatherSnapshot::from_reading(ZoneId::new("oleggio").unwrap(), r, 20.0);
        let clocks: Vec<String> = snapshot
            .hourly_forecast()
            .iter()
            .map(HourlyPoint::clock)
            .collect();
        assert_eq!(clocks, vec!["13:00", "14:00", "15:00"]);
        assert!((snapshot.water_temperature() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn outlook_takes_six_hours_after_now() {
        let mut r = reading(24.0, 1015.0, 0);
        r.hourly = (10..22).map(|h| point(h, 10, 3)).collect();
        let snapshot = WeatherSnapshot::from_reading(ZoneId::new("oleggio").unwrap(), r, 20.0);
        let outlook = snapshot.hourly_outlook(at(12));
        assert_eq!(outlook.hours.len(), 6);
        assert_eq!(outlook.hours[0].clock(), "13:00");
        assert_eq!(outlook.hours[5].clock(), "18:00");
    }

    #[test]
    fn outlook_flags_rain_and_best_hours() {
        let outlook = HourlyOutlook::new(vec![
            point(13, 70, 61),
            point(14, 50, 3),
            point(15, 10, 0),
            point(16, 29, 1),
            point(17, 30, 0),
        ]);
        assert_eq!(outlook.rain_warnings.len(), 1);
        assert_eq!(outlook.best_hours.len(), 2);
    }

    #[test]
    fn water_level_trend_rules() {
        assert_eq!(WaterLevelTrend::assess(WeatherCode::new(63), 0.0), WaterLevelTrend::Rising);
        assert_eq!(WaterLevelTrend::assess(WeatherCode::new(3), 2.5), WaterLevelTrend::Rising);
        assert_eq!(WaterLevelTrend::assess(WeatherCode::new(0), 0.0), WaterLevelTrend::Falling);
        assert_eq!(WaterLevelTrend::assess(WeatherCode::new(0), 0.4), WaterLevelTrend::Stable);
        assert_eq!(WaterLevelTrend::assess(WeatherCode::new(3), 0.0), WaterLevelTrend::Stable);
    }
}
