//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Weather adapter against a mock Open-Meteo server
//! - Synthetic fallback on provider failures
//! - A full zone report through the forecast service

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{
    ports::WeatherPort,
    services::{ForecastService, WaterTemperatureService},
};
use chrono::{NaiveDate, NaiveDateTime};
use domain::{
    entities::Catalog,
    services::thermal::ThermalModel,
    value_objects::{GeoLocation, ZoneId},
};
use infrastructure::{
    InMemoryThermalStateStore, LOMBARDIA_CATALOG, WeatherAdapter, config::WeatherConfig,
    parse_catalog,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 15)
        .unwrap()
        .and_hms_opt(12, 20, 0)
        .unwrap()
}

fn catalog() -> Catalog {
    parse_catalog(LOMBARDIA_CATALOG).expect("Built-in catalog is valid")
}

fn open_meteo_body() -> serde_json::Value {
    serde_json::json!({
        "timezone": "Europe/Rome",
        "current": {
            "time": "2025-07-15T12:15",
            "temperature_2m": 24.0,
            "relative_humidity_2m": 60,
            "pressure_msl": 1015.0,
            "wind_speed_10m": 8.0,
            "weather_code": 0,
            "cloud_cover": 5,
            "precipitation": 0.0
        },
        "hourly": {
            "time": [
                "2025-07-15T12:00", "2025-07-15T13:00", "2025-07-15T14:00",
                "2025-07-15T15:00", "2025-07-15T16:00", "2025-07-15T17:00",
                "2025-07-15T18:00", "2025-07-15T19:00"
            ],
            "temperature_2m": [24.0, 25.0, 26.0, 26.5, 26.0, 25.0, 24.0, 23.0],
            "pressure_msl": [1015.0, 1015.0, 1014.5, 1014.0, 1014.0, 1014.0, 1014.5, 1015.0],
            "precipitation_probability": [0, 5, 10, 70, 55, 20, 10, 0],
            "weather_code": [0, 0, 1, 80, 61, 2, 0, 0],
            "wind_speed_10m": [8.0, 9.0, 10.0, 15.0, 12.0, 9.0, 7.0, 6.0]
        }
    })
}

async fn mock_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

fn adapter(server: &MockServer) -> WeatherAdapter {
    WeatherAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        timeout_secs: 2,
        ..WeatherConfig::default()
    })
    .expect("Client builds")
}

fn zone_id(id: &str) -> ZoneId {
    ZoneId::new(id).unwrap()
}

fn oleggio_location() -> GeoLocation {
    GeoLocation::new(45.5967, 8.6386).unwrap()
}

// ============================================================================
// Weather Adapter Tests
// ============================================================================

mod weather_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn live_reading_from_provider() {
        let server = mock_server(ResponseTemplate::new(200).set_body_json(open_meteo_body())).await;
        let zone = zone_id("oleggio");

        let reading = adapter(&server)
            .current_conditions(&zone, &oleggio_location(), now())
            .await
            .unwrap();

        assert!(reading.is_live);
        assert!((reading.air_temperature - 24.0).abs() < f64::EPSILON);
        assert_eq!(reading.hourly.len(), 7);
        assert!(reading.hourly.iter().all(|h| h.time > now()));
    }

    #[tokio::test]
    async fn requests_local_time_and_kmh() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("timezone", "Europe/Rome"))
            .and(query_param("wind_speed_unit", "kmh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(open_meteo_body()))
            .expect(1)
            .mount(&server)
            .await;

        let reading = adapter(&server)
            .current_conditions(&zone_id("oleggio"), &oleggio_location(), now())
            .await
            .unwrap();
        assert!(reading.is_live);
    }

    #[tokio::test]
    async fn server_error_falls_back_to_synthetic() {
        let server = mock_server(ResponseTemplate::new(503)).await;

        let reading = adapter(&server)
            .current_conditions(&zone_id("oleggio"), &oleggio_location(), now())
            .await
            .unwrap();

        assert!(!reading.is_live);
        assert_eq!(reading.hourly.len(), 6);
        assert!((22.0..32.0).contains(&reading.air_temperature));
    }

    #[tokio::test]
    async fn garbage_body_falls_back_to_synthetic() {
        let server = mock_server(ResponseTemplate::new(200).set_body_string("<html>")).await;

        let reading = adapter(&server)
            .current_conditions(&zone_id("varese"), &oleggio_location(), now())
            .await
            .unwrap();

        assert!(!reading.is_live);
    }

    #[tokio::test]
    async fn fallback_is_stable_within_the_hour() {
        let server = mock_server(ResponseTemplate::new(500)).await;
        let adapter = adapter(&server);
        let zone = zone_id("maggiore");

        let first = adapter
            .current_conditions(&zone, &oleggio_location(), now())
            .await
            .unwrap();
        let later = now() + chrono::Duration::minutes(30);
        let second = adapter
            .current_conditions(&zone, &oleggio_location(), later)
            .await
            .unwrap();

        assert_eq!(first.air_temperature, second.air_temperature);
        assert_eq!(first.weather_code, second.weather_code);
    }
}

// ============================================================================
// Forecast Service Tests
// ============================================================================

mod forecast_tests {
    use super::*;

    fn service(server: &MockServer, store: Arc<InMemoryThermalStateStore>) -> ForecastService {
        let water = WaterTemperatureService::new(store, ThermalModel::default());
        ForecastService::new(
            Arc::new(catalog()),
            Arc::new(adapter(server)),
            Arc::new(water),
        )
    }

    #[tokio::test]
    async fn oleggio_report_with_live_weather() {
        let server = mock_server(ResponseTemplate::new(200).set_body_json(open_meteo_body())).await;
        let store = Arc::new(InMemoryThermalStateStore::new());
        let service = service(&server, Arc::clone(&store));

        let report = service.zone_report("Oleggio", now()).await.unwrap();

        let water = report.snapshot.water_temperature();
        assert!((4.0..=23.0).contains(&water));
        assert!(water >= 20.5);
        assert!(report.snapshot.is_live());
        assert_eq!(store.len(), 1);

        let names: Vec<_> = report.rankings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 7);
        assert!(!names.contains(&"Persico Reale"));
        assert!(report.rankings.windows(2).all(|w| w[0].score.value >= w[1].score.value));

        let outlook = &report.hourly_outlook;
        assert_eq!(outlook.hours.len(), 6);
        assert_eq!(outlook.rain_warnings.len(), 2);
    }

    #[tokio::test]
    async fn synthetic_weather_is_not_persisted() {
        let server = mock_server(ResponseTemplate::new(500)).await;
        let store = Arc::new(InMemoryThermalStateStore::new());
        let service = service(&server, Arc::clone(&store));

        let report = service.zone_report("varese", now()).await.unwrap();

        assert!(!report.snapshot.is_live());
        assert!(store.is_empty());
        assert!(!report.rankings.is_empty());
    }

    #[tokio::test]
    async fn unknown_zone_is_not_found() {
        let server = mock_server(ResponseTemplate::new(200).set_body_json(open_meteo_body())).await;
        let service = service(&server, Arc::new(InMemoryThermalStateStore::new()));

        let err = service.zone_report("Ticino Sud", now()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
