//! Activity scores and the rankings built from them

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{SpeciesId, ZoneId};

/// Named adjustment applied on top of the base score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    WaterTemperature,
    Pressure,
    Lunar,
    Seasonal,
    PreferredZone,
    Weather,
}

impl ScoreFactor {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WaterTemperature => "water temperature",
            Self::Pressure => "pressure",
            Self::Lunar => "moon phase",
            Self::Seasonal => "season",
            Self::PreferredZone => "preferred zone",
            Self::Weather => "weather",
        }
    }
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points contributed by one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAdjustment {
    pub factor: ScoreFactor,
    pub points: i32,
}

/// Audit trail of how a score was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub adjustments: Vec<ScoreAdjustment>,
}

impl ScoreBreakdown {
    /// Sum of base and adjustments before clamping
    #[must_use]
    pub fn raw_total(&self) -> i32 {
        self.base + self.adjustments.iter().map(|a| a.points).sum::<i32>()
    }

    /// Final score clamped to 0..=100
    #[must_use]
    pub fn total(&self) -> u8 {
        u8::try_from(self.raw_total().clamp(0, 100)).unwrap_or(0)
    }

    /// Points from a single factor, zero if it did not apply
    #[must_use]
    pub fn points_for(&self, factor: ScoreFactor) -> i32 {
        self.adjustments
            .iter()
            .filter(|a| a.factor == factor)
            .map(|a| a.points)
            .sum()
    }
}

/// Activity score of one species in one zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityScore {
    pub species_id: SpeciesId,
    pub zone_id: ZoneId,
    /// Score in 0..=100
    pub value: u8,
    pub breakdown: ScoreBreakdown,
}

impl ActivityScore {
    #[must_use]
    pub const fn tier(&self) -> ActivityTier {
        ActivityTier::from_score(self.value)
    }
}

/// Qualitative reading of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ActivityTier {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::Excellent,
            60..=74 => Self::Good,
            45..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for ActivityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall fishing outlook of a zone, from the mean species score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneOutlook {
    Great,
    Good,
    Difficult,
}

impl ZoneOutlook {
    /// Outlook from the ranked scores; an empty ranking is `Difficult`
    #[must_use]
    pub fn from_scores(scores: &[u8]) -> Self {
        if scores.is_empty() {
            return Self::Difficult;
        }
        let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let mean = f64::from(sum) / scores.len() as f64;
        if mean >= 70.0 {
            Self::Great
        } else if mean >= 55.0 {
            Self::Good
        } else {
            Self::Difficult
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Great => "Great day for fishing",
            Self::Good => "Good conditions",
            Self::Difficult => "Difficult conditions",
        }
    }
}

impl fmt::Display for ZoneOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a zone ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSpecies {
    pub name: String,
    pub score: ActivityScore,
    pub tier: ActivityTier,
    /// Whether the current hour is inside one of the species' active periods
    pub active_now: bool,
    pub baits: Vec<String>,
    pub techniques: Vec<String>,
}
