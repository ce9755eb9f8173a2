//! Water temperature estimation with thermal memory
//!
//! Each zone keeps, per calendar month, an accumulated heat offset that
//! grows when the air is warmer than the water and dissipates by a fixed
//! fraction on every daily step. The estimate is the previous water
//! temperature plus that offset, corrected for surface weather, scaled by
//! how strongly the water body reacts, pulled back towards the monthly
//! climatology and clamped to a realistic range.
//!
//! The daily step is applied at most once per calendar day: later
//! estimates on the same day start again from the state recorded at the
//! first one, so repeated refreshes with the same inputs agree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{ThermalState, Zone},
    value_objects::{WaterBody, WeatherCode},
};

/// Tunable coefficients of the thermal model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalParameters {
    /// Fraction of a positive air/water gap absorbed per day
    pub gain_rate: f64,
    /// Multiplier on gain during daylight hours
    pub daytime_boost: f64,
    /// First daylight hour, inclusive
    pub daytime_start_hour: u32,
    /// Last daylight hour, inclusive
    pub daytime_end_hour: u32,
    /// Multiplier on gain under a clear sky
    pub clear_sky_boost: f64,
    /// Cooling runs at this fraction of the heating rate
    pub cooling_ratio: f64,
    /// Fraction of accumulated heat lost per day
    pub dissipation: f64,
    /// Absolute bound on accumulated heat
    pub max_accumulation: f64,
    /// Cooling applied by rain
    pub rain_cooling: f64,
    /// Wind speed in km/h above which the surface is mixed
    pub wind_threshold_kmh: f64,
    /// Cooling by mixing when the air is colder than the water
    pub wind_cooling: f64,
    /// Warming by mixing otherwise
    pub wind_warming: f64,
    /// Fraction of the distance to climatology recovered per estimate
    pub seasonal_pull: f64,
}

impl Default for ThermalParameters {
    fn default() -> Self {
        Self {
            gain_rate: 0.08,
            daytime_boost: 1.3,
            daytime_start_hour: 8,
            daytime_end_hour: 18,
            clear_sky_boost: 1.5,
            cooling_ratio: 0.6,
            dissipation: 0.05,
            max_accumulation: 8.0,
            rain_cooling: 0.3,
            wind_threshold_kmh: 25.0,
            wind_cooling: 0.4,
            wind_warming: 0.2,
            seasonal_pull: 0.1,
        }
    }
}

/// Weather and time driving one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalInputs {
    pub air_temperature: f64,
    pub weather_code: WeatherCode,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Local calendar date
    pub date: NaiveDate,
    /// Local hour, 0-23
    pub hour: u32,
}

/// Where the daily step starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalStart {
    pub previous_temp: f64,
    pub heat_accumulation: f64,
    /// No stored state existed for the key
    pub first_observation: bool,
}

/// Intermediate values of every stage, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalTrace {
    pub seasonal_base: f64,
    pub previous_temp: f64,
    pub temp_gap: f64,
    pub heat_gain: f64,
    pub heat_accumulation: f64,
    pub baseline: f64,
    pub after_surface: f64,
    pub after_zone_response: f64,
    pub after_seasonal_pull: f64,
    pub clamped: f64,
}

/// Result of one estimate
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalOutcome {
    /// Estimated water temperature rounded to one decimal
    pub water_temperature: f64,
    pub trace: ThermalTrace,
    /// State to store for the key if the reading is trusted
    pub next_state: ThermalState,
}

/// The water temperature estimator
#[derive(Debug, Clone, Default)]
pub struct ThermalModel {
    params: ThermalParameters,
}

impl ThermalModel {
    #[must_use]
    pub const fn new(params: ThermalParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn parameters(&self) -> &ThermalParameters {
        &self.params
    }

    /// Prior temperature and heat for today's step
    ///
    /// Without prior state the step starts from climatology with no heat. A
    /// state already updated today yields its day-start snapshot. A state
    /// older than yesterday has its heat dissipated once for every skipped
    /// day.
    #[must_use]
    pub fn starting_point(
        &self,
        prior: Option<&ThermalState>,
        seasonal_base: f64,
        today: NaiveDate,
    ) -> ThermalStart {
        let Some(state) = prior else {
            return ThermalStart {
                previous_temp: seasonal_base,
                heat_accumulation: 0.0,
                first_observation: true,
            };
        };
        if state.last_update_date == today {
            return ThermalStart {
                previous_temp: state.day_start_temp,
                heat_accumulation: state.day_start_heat,
                first_observation: false,
            };
        }
        let skipped = (today - state.last_update_date).num_days() - 1;
        let mut heat = state.heat_accumulation;
        for _ in 0..skipped.max(0) {
            heat -= heat * self.params.dissipation;
        }
        ThermalStart {
            previous_temp: state.current_estimated_temp,
            heat_accumulation: heat,
            first_observation: false,
        }
    }

    /// Heat exchanged with the air for a given gap
    #[must_use]
    pub fn heat_gain(&self, temp_gap: f64, hour: u32, code: WeatherCode) -> f64 {
        let p = &self.params;
        if temp_gap > 0.0 {
            let mut gain = temp_gap * p.gain_rate;
            if (p.daytime_start_hour..=p.daytime_end_hour).contains(&hour) {
                gain *= p.daytime_boost;
            }
            if code.is_clear_sky() {
                gain *= p.clear_sky_boost;
            }
            gain
        } else {
            temp_gap * p.gain_rate * p.cooling_ratio
        }
    }

    /// Add gain, dissipate and clamp
    #[must_use]
    pub fn accumulate(&self, heat: f64, gain: f64) -> f64 {
        let mut heat = heat + gain;
        heat -= heat * self.params.dissipation;
        heat.clamp(-self.params.max_accumulation, self.params.max_accumulation)
    }

    /// Rain cooling and wind mixing
    ///
    /// Both effects are measured against the incoming water temperature and
    /// applied together, so rain cooling does not flip the wind direction.
    #[must_use]
    pub fn surface_effects(
        &self,
        water: f64,
        air: f64,
        code: WeatherCode,
        wind_speed: f64,
    ) -> f64 {
        let p = &self.params;
        let mut effect = 0.0;
        if code.is_cooling_rain() {
            effect -= p.rain_cooling;
        }
        if wind_speed > p.wind_threshold_kmh {
            if air < water {
                effect -= p.wind_cooling;
            } else {
                effect += p.wind_warming;
            }
        }
        water + effect
    }

    /// Extra response of the water body to the accumulated heat
    #[must_use]
    pub fn zone_response(water: f64, heat: f64, body: WaterBody) -> f64 {
        water + heat * body.heat_response()
    }

    /// Move part of the way back towards climatology
    #[must_use]
    pub fn seasonal_pull(&self, water: f64, seasonal_base: f64) -> f64 {
        water + (seasonal_base - water) * self.params.seasonal_pull
    }

    /// Run every stage for one zone and reading
    #[must_use]
    pub fn estimate(
        &self,
        zone: &Zone,
        month: u32,
        prior: Option<&ThermalState>,
        inputs: &ThermalInputs,
    ) -> ThermalOutcome {
        let seasonal_base = zone.seasonal_base(month);
        let start = self.starting_point(prior, seasonal_base, inputs.date);

        let temp_gap = inputs.air_temperature - start.previous_temp;
        let heat_gain = self.heat_gain(temp_gap, inputs.hour, inputs.weather_code);
        let heat_accumulation = self.accumulate(start.heat_accumulation, heat_gain);
        let baseline = start.previous_temp + heat_accumulation;
        let after_surface = self.surface_effects(
            baseline,
            inputs.air_temperature,
            inputs.weather_code,
            inputs.wind_speed,
        );
        let after_zone_response =
            Self::zone_response(after_surface, heat_accumulation, zone.water_body);
        let after_seasonal_pull = self.seasonal_pull(after_zone_response, seasonal_base);
        let clamped = zone.water_temp_range.clamp(after_seasonal_pull);

        let next_state = ThermalState {
            current_estimated_temp: clamped,
            heat_accumulation,
            last_update_date: inputs.date,
            last_air_temp: inputs.air_temperature,
            seasonal_base,
            day_start_temp: start.previous_temp,
            day_start_heat: start.heat_accumulation,
        };

        ThermalOutcome {
            water_temperature: round_one_decimal(clamped),
            trace: ThermalTrace {
                seasonal_base,
                previous_temp: start.previous_temp,
                temp_gap,
                heat_gain,
                heat_accumulation,
                baseline,
                after_surface,
                after_zone_response,
                after_seasonal_pull,
                clamped,
            },
            next_state,
        }
    }
}

/// Round half away from zero to one decimal
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
