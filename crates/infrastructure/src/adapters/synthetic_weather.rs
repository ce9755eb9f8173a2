//! Synthetic weather used when the provider is unavailable
//!
//! Values are drawn from seasonal bands with an RNG seeded from the zone,
//! the date and the hour, so refreshing within the same hour reproduces
//! the same reading.

use chrono::{Duration, NaiveDateTime, Timelike};
use domain::{
    entities::{HourlyPoint, OUTLOOK_HOURS, WeatherReading},
    services::astro,
    value_objects::{Percentage, Season, WeatherCode, ZoneId},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Conditions drawn for the current season
const WINTER_CODES: [u8; 3] = [3, 0, 45];
const SUMMER_CODES: [u8; 3] = [0, 2, 95];
const MILD_CODES: [u8; 3] = [3, 61, 0];

fn seed(zone_id: &ZoneId, now: NaiveDateTime) -> u64 {
    let material = format!("{zone_id}|{}|{}", now.date(), now.hour());
    let hash = blake3::hash(material.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

fn start_of_hour(now: NaiveDateTime) -> NaiveDateTime {
    now.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build a plausible reading for a zone at a local time
#[must_use]
pub fn synthetic_reading(zone_id: &ZoneId, now: NaiveDateTime) -> WeatherReading {
    let mut rng = StdRng::seed_from_u64(seed(zone_id, now));

    let (air_band, codes) = match astro::season(now.date()) {
        Season::Winter => (0_i32..8, WINTER_CODES),
        Season::Summer => (22..32, SUMMER_CODES),
        Season::Spring | Season::Autumn => (10..20, MILD_CODES),
    };

    let air_temperature = f64::from(rng.random_range(air_band));
    let weather_code = WeatherCode::new(codes[rng.random_range(0..codes.len())]);
    let pressure = f64::from(rng.random_range(1005_i32..1025));
    let humidity = Percentage::clamped(rng.random_range(50..85));
    let wind_speed = f64::from(rng.random_range(5_i32..20));
    let cloud_cover = Percentage::clamped(rng.random_range(20..80));

    let base = start_of_hour(now);
    let hourly = (1..=OUTLOOK_HOURS)
        .map(|offset| HourlyPoint {
            time: base + Duration::hours(i64::try_from(offset).unwrap_or(i64::MAX)),
            temperature: one_decimal(air_temperature + rng.random_range(-2.0..2.0)),
            pressure: one_decimal(pressure + rng.random_range(-3.0..3.0)),
            precipitation_probability: Percentage::clamped(rng.random_range(0..30)),
            weather_code,
            wind_speed: f64::from(rng.random_range(5_i32..15)),
        })
        .collect();

    WeatherReading {
        observed_at: now,
        air_temperature,
        pressure,
        humidity,
        wind_speed,
        weather_code,
        cloud_cover,
        precipitation: 0.0,
        hourly,
        is_live: false,
    }
}
