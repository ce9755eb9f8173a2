//! Domain services - Pure computations over entities

pub mod activity;
pub mod astro;
pub mod thermal;

pub use activity::{rank_species, score_species, ScoringContext, BASE_SCORE};
pub use astro::{moon_age, moon_phase, season};
pub use thermal::{
    round_one_decimal, ThermalInputs, ThermalModel, ThermalOutcome, ThermalParameters,
    ThermalStart, ThermalTrace,
};
