//! Property-based tests for the domain engine
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{Duration, NaiveDate};
use domain::{
    entities::{SpeciesProfile, ThermalState, WeatherReading, WeatherSnapshot, Zone},
    services::{
        activity::{score_species, ScoringContext},
        astro::{moon_age, SYNODIC_MONTH_DAYS},
        thermal::{ThermalInputs, ThermalModel},
    },
    value_objects::{
        GeoLocation, MoonPhase, Percentage, Season, SpeciesId, TemperatureRange, WaterBody,
        WeatherCode, ZoneId,
    },
};
use proptest::prelude::*;

fn varese() -> Zone {
    Zone {
        id: ZoneId::new("varese").unwrap(),
        name: "Lago di Varese".to_string(),
        location: GeoLocation::new(45.8167, 8.7333).unwrap(),
        water_body: WaterBody::SmallLake,
        monthly_water_temp: [
            5.0, 5.5, 7.5, 12.0, 17.0, 21.0, 24.0, 23.5, 20.0, 15.5, 10.0, 6.0,
        ],
        water_temp_range: TemperatureRange::new(4.0, 26.0).unwrap(),
    }
}

fn profile(temp_min: f64, width: f64, pressure_low: f64) -> SpeciesProfile {
    SpeciesProfile {
        id: SpeciesId::new("test").unwrap(),
        name: "Test".to_string(),
        water_temp: TemperatureRange::new(temp_min, temp_min + width).unwrap(),
        pressure_low,
        pressure_high: pressure_low + 20.0,
        favorable_moon_phases: [MoonPhase::Full].into(),
        favorable_seasons: [Season::Summer].into(),
        active_hours: Default::default(),
        habitat_zones: vec!["varese".to_string()],
        preferred_zones: vec!["varese".to_string()],
        baits: Vec::new(),
        techniques: Vec::new(),
    }
}

fn snapshot(water: f64, pressure: f64, code: u8) -> WeatherSnapshot {
    let observed_at = NaiveDate::from_ymd_opt(2025, 7, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let reading = WeatherReading {
        observed_at,
        air_temperature: 20.0,
        pressure,
        humidity: Percentage::new(50).unwrap(),
        wind_speed: 5.0,
        weather_code: WeatherCode::new(code),
        cloud_cover: Percentage::new(50).unwrap(),
        precipitation: 0.0,
        hourly: Vec::new(),
        is_live: true,
    };
    WeatherSnapshot::from_reading(ZoneId::new("varese").unwrap(), reading, water)
}

fn moon_strategy() -> impl Strategy<Value = MoonPhase> {
    prop_oneof![
        Just(MoonPhase::New),
        Just(MoonPhase::WaxingCrescent),
        Just(MoonPhase::FirstQuarter),
        Just(MoonPhase::Full),
        Just(MoonPhase::LastQuarter),
    ]
}

fn season_strategy() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Winter),
        Just(Season::Spring),
        Just(Season::Summer),
        Just(Season::Autumn),
    ]
}

// ============================================================================
// Activity score
// ============================================================================

mod activity_tests {
    use super::*;

    proptest! {
        #[test]
        fn score_is_always_within_bounds(
            water in -50.0f64..=100.0,
            pressure in 900.0f64..1100.0,
            code in any::<u8>(),
            temp_min in 0.0f64..25.0,
            width in 0.0f64..15.0,
            pressure_low in 990.0f64..1020.0,
            moon in moon_strategy(),
            season in season_strategy(),
        ) {
            let zone = varese();
            let snap = snapshot(water, pressure, code);
            let ctx = ScoringContext { zone: &zone, snapshot: &snap, moon_phase: moon, season };
            let score = score_species(&profile(temp_min, width, pressure_low), &ctx);
            prop_assert!(score.is_some());
            prop_assert!(score.unwrap().value <= 100);
        }

        #[test]
        fn raw_total_stays_in_known_band(
            water in -50.0f64..=100.0,
            pressure in 900.0f64..1100.0,
            code in any::<u8>(),
            moon in moon_strategy(),
            season in season_strategy(),
        ) {
            let zone = varese();
            let snap = snapshot(water, pressure, code);
            let ctx = ScoringContext { zone: &zone, snapshot: &snap, moon_phase: moon, season };
            let score = score_species(&profile(15.0, 10.0, 1010.0), &ctx).unwrap();
            let raw = score.breakdown.raw_total();
            prop_assert!((30..=133).contains(&raw));
        }
    }
}

// ============================================================================
// Thermal model
// ============================================================================

mod thermal_tests {
    use super::*;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    proptest! {
        #[test]
        fn heat_and_water_stay_bounded(
            airs in prop::collection::vec(-20.0f64..45.0, 1..60),
            codes in prop::collection::vec(any::<u8>(), 60),
            wind in 0.0f64..80.0,
            hour in 0u32..24,
        ) {
            let model = ThermalModel::default();
            let zone = varese();
            let mut state: Option<ThermalState> = None;
            for (day, air) in airs.iter().enumerate() {
                let inputs = ThermalInputs {
                    air_temperature: *air,
                    weather_code: WeatherCode::new(codes[day]),
                    wind_speed: wind,
                    date: start_date() + Duration::days(day as i64),
                    hour,
                };
                let outcome = model.estimate(&zone, 6, state.as_ref(), &inputs);
                prop_assert!(outcome.next_state.heat_accumulation.abs() <= 8.0);
                prop_assert!((4.0..=26.0).contains(&outcome.water_temperature));
                state = Some(outcome.next_state);
            }
        }

        #[test]
        fn repeated_same_day_estimates_agree(
            air in -10.0f64..40.0,
            code in any::<u8>(),
            wind in 0.0f64..60.0,
            hour in 0u32..24,
            repeats in 1usize..5,
        ) {
            let model = ThermalModel::default();
            let zone = varese();
            let inputs = ThermalInputs {
                air_temperature: air,
                weather_code: WeatherCode::new(code),
                wind_speed: wind,
                date: start_date(),
                hour,
            };
            let first = model.estimate(&zone, 6, None, &inputs);
            let mut state = first.next_state.clone();
            for _ in 0..repeats {
                let again = model.estimate(&zone, 6, Some(&state), &inputs);
                prop_assert!((again.water_temperature - first.water_temperature).abs() < 1e-9);
                state = again.next_state;
            }
        }
    }
}

// ============================================================================
// Astro
// ============================================================================

mod astro_tests {
    use super::*;

    proptest! {
        #[test]
        fn moon_age_is_within_cycle(offset in -100_000i64..100_000) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap() + Duration::days(offset);
            let age = moon_age(date);
            prop_assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age));
        }

        #[test]
        fn bucket_boundaries_are_stable(age in 0.0f64..29.53) {
            let phase = MoonPhase::from_age(age);
            let expected = if age < 1.0 {
                MoonPhase::New
            } else if age < 7.0 {
                MoonPhase::WaxingCrescent
            } else if age < 14.0 {
                MoonPhase::FirstQuarter
            } else if age < 21.0 {
                MoonPhase::Full
            } else {
                MoonPhase::LastQuarter
            };
            prop_assert_eq!(phase, expected);
        }
    }
}

// ============================================================================
// GeoLocation
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![(-1000.0f64..-90.1f64), (90.1f64..1000.0f64)],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}
