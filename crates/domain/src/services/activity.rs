//! Multi-factor species activity scoring
//!
//! A score starts at [`BASE_SCORE`] and is adjusted by an ordered list of
//! rules, each tied to a [`ScoreFactor`]. The total is clamped to 0..=100.

use crate::{
    entities::{
        ActivityScore, RankedSpecies, ScoreAdjustment, ScoreBreakdown, ScoreFactor,
        SpeciesProfile, WeatherSnapshot, Zone,
    },
    value_objects::{MoonPhase, Season},
};

/// Neutral starting score
pub const BASE_SCORE: i32 = 50;

/// Distance from the preferred temperature midpoint still worth a bonus
pub const NEAR_MIDPOINT_TOLERANCE: f64 = 3.0;

/// Everything a rule may look at besides the species
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub zone: &'a Zone,
    pub snapshot: &'a WeatherSnapshot,
    pub moon_phase: MoonPhase,
    pub season: Season,
}

type Rule = fn(&SpeciesProfile, &ScoringContext<'_>) -> i32;

const PIPELINE: [(ScoreFactor, Rule); 6] = [
    (ScoreFactor::WaterTemperature, water_temperature_points),
    (ScoreFactor::Pressure, pressure_points),
    (ScoreFactor::Lunar, lunar_points),
    (ScoreFactor::Seasonal, seasonal_points),
    (ScoreFactor::PreferredZone, preferred_zone_points),
    (ScoreFactor::Weather, weather_points),
];

fn water_temperature_points(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> i32 {
    let water = ctx.snapshot.water_temperature();
    let range = species.water_temp;
    if range.contains(water) {
        25
    } else if (water - (range.min() + range.max()) / 2.0).abs() <= NEAR_MIDPOINT_TOLERANCE {
        10
    } else {
        -20
    }
}

fn pressure_points(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> i32 {
    if species.pressure_in_range(ctx.snapshot.pressure()) {
        15
    } else {
        -10
    }
}

fn lunar_points(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> i32 {
    if species.favorable_moon_phases.contains(&ctx.moon_phase) {
        15
    } else {
        0
    }
}

fn seasonal_points(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> i32 {
    if species.favorable_seasons.contains(&ctx.season) {
        10
    } else {
        0
    }
}

fn preferred_zone_points(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> i32 {
    if species
        .preferred_zones
        .iter()
        .any(|r| ctx.zone.is_referenced_by(r))
    {
        10
    } else {
        0
    }
}

fn weather_points(_species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> i32 {
    let category = ctx.snapshot.weather_code().category();
    if category.is_wet() {
        8
    } else if category.is_fair() {
        5
    } else {
        0
    }
}

/// Whether the species lives in the context's zone
#[must_use]
pub fn lives_in(species: &SpeciesProfile, zone: &Zone) -> bool {
    species.habitat_zones.iter().any(|r| zone.is_referenced_by(r))
}

/// Score a species regardless of habitat
#[must_use]
pub fn breakdown(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> ScoreBreakdown {
    ScoreBreakdown {
        base: BASE_SCORE,
        adjustments: PIPELINE
            .iter()
            .map(|(factor, rule)| ScoreAdjustment {
                factor: *factor,
                points: rule(species, ctx),
            })
            .collect(),
    }
}

/// Score a species in the context's zone
///
/// Returns `None` when the zone is not part of the species' habitat.
#[must_use]
pub fn score_species(species: &SpeciesProfile, ctx: &ScoringContext<'_>) -> Option<ActivityScore> {
    if !lives_in(species, ctx.zone) {
        return None;
    }
    let breakdown = breakdown(species, ctx);
    Some(ActivityScore {
        species_id: species.id.clone(),
        zone_id: ctx.zone.id.clone(),
        value: breakdown.total(),
        breakdown,
    })
}

/// Score and rank every species living in the zone
///
/// Ordered by descending score, ties broken by name.
pub fn rank_species<'a>(
    species: impl IntoIterator<Item = &'a SpeciesProfile>,
    ctx: &ScoringContext<'_>,
    hour: u32,
) -> Vec<RankedSpecies> {
    let mut ranked: Vec<RankedSpecies> = species
        .into_iter()
        .filter_map(|profile| {
            score_species(profile, ctx).map(|score| RankedSpecies {
                name: profile.name.clone(),
                tier: score.tier(),
                score,
                active_now: profile.is_active_at(hour),
                baits: profile.baits.clone(),
                techniques: profile.techniques.clone(),
            })
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .value
            .cmp(&a.score.value)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}
