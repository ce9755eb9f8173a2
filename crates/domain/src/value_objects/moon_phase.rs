//! Lunar phase buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of five fixed-width buckets of the synodic month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    /// Age below 1 day
    New,
    /// Age in [1, 7)
    WaxingCrescent,
    /// Age in [7, 14)
    FirstQuarter,
    /// Age in [14, 21)
    Full,
    /// Age of 21 days or more
    LastQuarter,
}

impl MoonPhase {
    /// Bucket a moon age expressed in days since the last new moon
    #[must_use]
    pub fn from_age(age_days: f64) -> Self {
        if age_days < 1.0 {
            Self::New
        } else if age_days < 7.0 {
            Self::WaxingCrescent
        } else if age_days < 14.0 {
            Self::FirstQuarter
        } else if age_days < 21.0 {
            Self::Full
        } else {
            Self::LastQuarter
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New moon",
            Self::WaxingCrescent => "Waxing crescent",
            Self::FirstQuarter => "First quarter",
            Self::Full => "Full moon",
            Self::LastQuarter => "Last quarter",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::Full => "🌕",
            Self::LastQuarter => "🌗",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
