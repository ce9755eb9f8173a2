//! Domain entities - Reference data, readings and derived results

mod activity;
mod calendar;
mod catalog;
mod species;
mod thermal_state;
mod weather;
mod zone;

pub use activity::{
    ActivityScore, ActivityTier, RankedSpecies, ScoreAdjustment, ScoreBreakdown, ScoreFactor,
    ZoneOutlook,
};
pub use calendar::{CalendarEntry, ClosedPeriod, MonthDay, SeasonStatus};
pub use catalog::Catalog;
pub use species::SpeciesProfile;
pub use thermal_state::{ThermalKey, ThermalState};
pub use weather::{
    HourlyOutlook, HourlyPoint, WaterLevelTrend, WeatherReading, WeatherSnapshot,
    BEST_HOUR_PROBABILITY, OUTLOOK_HOURS, RAIN_WARNING_PROBABILITY, RISING_PRECIPITATION_MM,
};
pub use zone::Zone;

#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) use super::species::fixtures::*;
    pub(crate) use super::weather::fixtures::*;
    pub(crate) use super::zone::fixtures::*;
}
