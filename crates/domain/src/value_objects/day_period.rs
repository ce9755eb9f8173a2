//! Named periods of the day used for species activity windows

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named part of the day
///
/// Periods overlap: 19:00 is both `Sunset` and `Evening`. `Night` wraps
/// around midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    Dawn,
    Morning,
    Day,
    Afternoon,
    Sunset,
    Evening,
    Night,
}

impl DayPeriod {
    /// All periods in chronological order of their start hour
    pub const ALL: [Self; 7] = [
        Self::Dawn,
        Self::Morning,
        Self::Day,
        Self::Afternoon,
        Self::Sunset,
        Self::Evening,
        Self::Night,
    ];

    /// Inclusive start and end hour of the period
    #[must_use]
    pub const fn hours(self) -> (u32, u32) {
        match self {
            Self::Dawn => (5, 7),
            Self::Morning => (6, 11),
            Self::Day => (8, 18),
            Self::Afternoon => (12, 17),
            Self::Sunset => (18, 20),
            Self::Evening => (18, 22),
            Self::Night => (22, 4),
        }
    }

    /// Whether the local hour falls inside this period
    #[must_use]
    pub const fn covers(self, hour: u32) -> bool {
        let (start, end) = self.hours();
        if start <= end {
            hour >= start && hour <= end
        } else {
            hour >= start || hour <= end
        }
    }

    /// Every period that covers the given hour
    #[must_use]
    pub fn from_hour(hour: u32) -> Vec<Self> {
        Self::ALL.into_iter().filter(|p| p.covers(hour)).collect()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Afternoon => "afternoon",
            Self::Sunset => "sunset",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_wraps_midnight() {
        assert!(DayPeriod::Night.covers(23));
        assert!(DayPeriod::Night.covers(0));
        assert!(DayPeriod::Night.covers(4));
        assert!(!DayPeriod::Night.covers(5));
        assert!(!DayPeriod::Night.covers(21));
    }

    #[test]
    fn overlapping_periods() {
        let periods = DayPeriod::from_hour(18);
        assert!(periods.contains(&DayPeriod::Day));
        assert!(periods.contains(&DayPeriod::Sunset));
        assert!(periods.contains(&DayPeriod::Evening));
        assert!(!periods.contains(&DayPeriod::Afternoon));
    }

    #[test]
    fn every_hour_has_a_period() {
        for hour in 0..24 {
            assert!(!DayPeriod::from_hour(hour).is_empty(), "hour {hour}");
        }
    }
}
