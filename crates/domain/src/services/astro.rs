//! Lunar phase and season from a calendar date

use chrono::{Datelike, NaiveDate};

use crate::value_objects::{MoonPhase, Season};

/// Length of the synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Days from the common era of the reference new moon, 2024-01-11
const REFERENCE_NEW_MOON_DAYS_FROM_CE: i32 = 738_896;

/// Days since the last new moon, in `[0, 29.53)`
#[must_use]
pub fn moon_age(date: NaiveDate) -> f64 {
    let elapsed = date.num_days_from_ce() - REFERENCE_NEW_MOON_DAYS_FROM_CE;
    f64::from(elapsed).rem_euclid(SYNODIC_MONTH_DAYS)
}

#[must_use]
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    MoonPhase::from_age(moon_age(date))
}

#[must_use]
pub fn season(date: NaiveDate) -> Season {
    Season::from_month(date.month())
}
