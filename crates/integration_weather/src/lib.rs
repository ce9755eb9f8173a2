//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Weather API (<https://open-meteo.com>).
//! Provides current conditions and an hourly forecast, in local time,
//! without requiring an API key.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentConditions, HourlyConditions, LocalConditions};
