//! Species profile - Environmental preferences of a fish species

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{DayPeriod, MoonPhase, Season, SpeciesId, TemperatureRange},
};

/// Immutable reference data describing when and where a species feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    pub id: SpeciesId,
    /// Common (Italian) name, e.g. "Trota Fario"
    pub name: String,
    /// Preferred water temperature in °C
    pub water_temp: TemperatureRange,
    /// Lower bound of the favorable pressure band in hPa
    pub pressure_low: f64,
    /// Upper bound of the favorable pressure band in hPa
    pub pressure_high: f64,
    #[serde(default)]
    pub favorable_moon_phases: BTreeSet<MoonPhase>,
    #[serde(default)]
    pub favorable_seasons: BTreeSet<Season>,
    #[serde(default)]
    pub active_hours: BTreeSet<DayPeriod>,
    /// Zone references (id or name fragment) where the species lives
    pub habitat_zones: Vec<String>,
    /// Subset of references where the species is most abundant
    #[serde(default)]
    pub preferred_zones: Vec<String>,
    #[serde(default)]
    pub baits: Vec<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
}

impl SpeciesProfile {
    /// Whether the pressure lies in the favorable band (bounds included)
    #[must_use]
    pub fn pressure_in_range(&self, pressure: f64) -> bool {
        (self.pressure_low..=self.pressure_high).contains(&pressure)
    }

    /// Whether the species is typically active at the given local hour
    #[must_use]
    pub fn is_active_at(&self, hour: u32) -> bool {
        self.active_hours.iter().any(|period| period.covers(hour))
    }

    /// Check internal consistency of the profile
    ///
    /// Zone references are checked by the catalog, which knows the zones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` for a blank name, an inverted or non-finite
    /// pressure band, or an empty habitat.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_catalog(format!(
                "species '{}' has an empty name",
                self.id
            )));
        }
        if !self.pressure_low.is_finite()
            || !self.pressure_high.is_finite()
            || self.pressure_low > self.pressure_high
        {
            return Err(DomainError::invalid_catalog(format!(
                "species '{}' pressure band {}-{} is invalid",
                self.id, self.pressure_low, self.pressure_high
            )));
        }
        if self.habitat_zones.is_empty() {
            return Err(DomainError::invalid_catalog(format!(
                "species '{}' has no habitat zones",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Carp-like profile: 15-25 °C, 1010-1030 hPa
    pub fn carpa() -> SpeciesProfile {
        SpeciesProfile {
            id: SpeciesId::new("carpa").unwrap(),
            name: "Carpa".to_string(),
            water_temp: TemperatureRange::new(15.0, 25.0).unwrap(),
            pressure_low: 1010.0,
            pressure_high: 1030.0,
            favorable_moon_phases: [MoonPhase::Full, MoonPhase::WaxingCrescent].into(),
            favorable_seasons: [Season::Summer, Season::Spring].into(),
            active_hours: [DayPeriod::Day, DayPeriod::Evening, DayPeriod::Night].into(),
            habitat_zones: vec!["varese".into(), "oleggio".into(), "panperduto".into()],
            preferred_zones: vec!["varese".into(), "oleggio".into()],
            baits: vec!["Mais".into(), "Boilies".into()],
            techniques: vec!["Carpfishing".into(), "Feeder".into()],
        }
    }

    /// Pike-like profile living in the lakes
    pub fn luccio() -> SpeciesProfile {
        SpeciesProfile {
            id: SpeciesId::new("luccio").unwrap(),
            name: "Luccio".to_string(),
            water_temp: TemperatureRange::new(10.0, 22.0).unwrap(),
            pressure_low: 1005.0,
            pressure_high: 1025.0,
            favorable_moon_phases: [MoonPhase::WaxingCrescent, MoonPhase::FirstQuarter].into(),
            favorable_seasons: [Season::Spring, Season::Autumn].into(),
            active_hours: [DayPeriod::Dawn, DayPeriod::Sunset].into(),
            habitat_zones: vec!["Lago Maggiore".into(), "oleggio".into()],
            preferred_zones: vec!["maggiore".into()],
            baits: vec!["Cucchiaini".into()],
            techniques: vec!["Spinning".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn pressure_band_is_inclusive() {
        let species = carpa();
        assert!(species.pressure_in_range(1010.0));
        assert!(species.pressure_in_range(1030.0));
        assert!(!species.pressure_in_range(1009.9));
    }

    #[test]
    fn active_hours_follow_periods() {
        let species = luccio();
        assert!(species.is_active_at(6));
        assert!(species.is_active_at(19));
        assert!(!species.is_active_at(13));
    }

    #[test]
    fn validate_rejects_inverted_pressure() {
        let mut species = carpa();
        assert!(species.validate().is_ok());
        species.pressure_low = 1040.0;
        assert!(species.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_habitat() {
        let mut species = carpa();
        species.habitat_zones.clear();
        assert!(species.validate().is_err());
    }
}
