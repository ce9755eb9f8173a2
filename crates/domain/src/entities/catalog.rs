//! Catalog - Validated reference data of zones, species and regulations

use std::collections::HashSet;

use chrono::NaiveDate;

use super::{CalendarEntry, SeasonStatus, SpeciesProfile, Zone};
use crate::errors::DomainError;

/// Zones, species profiles and the fishing calendar, checked for
/// consistency once at construction
#[derive(Debug, Clone)]
pub struct Catalog {
    zones: Vec<Zone>,
    species: Vec<SpeciesProfile>,
    calendar: Vec<CalendarEntry>,
}

impl Catalog {
    /// Build a catalog, validating every record and cross-reference
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` when there are no zones, ids are duplicated,
    /// a record fails its own validation, a species or calendar zone
    /// reference matches no zone, or a calendar entry names an unknown
    /// species.
    pub fn new(
        zones: Vec<Zone>,
        species: Vec<SpeciesProfile>,
        calendar: Vec<CalendarEntry>,
    ) -> Result<Self, DomainError> {
        if zones.is_empty() {
            return Err(DomainError::invalid_catalog("catalog defines no zones"));
        }

        let mut zone_ids = HashSet::new();
        for zone in &zones {
            zone.validate()?;
            if !zone_ids.insert(zone.id.clone()) {
                return Err(DomainError::invalid_catalog(format!(
                    "duplicate zone id '{}'",
                    zone.id
                )));
            }
        }

        let resolves = |reference: &str| zones.iter().any(|z| z.is_referenced_by(reference));

        let mut species_ids = HashSet::new();
        for profile in &species {
            profile.validate()?;
            if !species_ids.insert(profile.id.clone()) {
                return Err(DomainError::invalid_catalog(format!(
                    "duplicate species id '{}'",
                    profile.id
                )));
            }
            if let Some(unknown) = profile
                .habitat_zones
                .iter()
                .chain(&profile.preferred_zones)
                .find(|r| !resolves(r))
            {
                return Err(DomainError::invalid_catalog(format!(
                    "species '{}' references unknown zone '{unknown}'",
                    profile.id
                )));
            }
        }

        for entry in &calendar {
            entry.validate()?;
            if !species_ids.contains(&entry.species) {
                return Err(DomainError::invalid_catalog(format!(
                    "calendar entry references unknown species '{}'",
                    entry.species
                )));
            }
            if let Some(unknown) = entry.zones.iter().find(|r| !resolves(r)) {
                return Err(DomainError::invalid_catalog(format!(
                    "calendar for '{}' references unknown zone '{unknown}'",
                    entry.species
                )));
            }
        }

        Ok(Self {
            zones,
            species,
            calendar,
        })
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn species(&self) -> &[SpeciesProfile] {
        &self.species
    }

    #[must_use]
    pub fn calendar(&self) -> &[CalendarEntry] {
        &self.calendar
    }

    /// Resolve a zone by id or full name, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing matches.
    pub fn zone(&self, query: &str) -> Result<&Zone, DomainError> {
        self.zones
            .iter()
            .find(|z| z.matches_query(query))
            .ok_or_else(|| DomainError::not_found("Zone", query.trim()))
    }

    /// Resolve a species by id or name, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing matches.
    pub fn species_profile(&self, query: &str) -> Result<&SpeciesProfile, DomainError> {
        let query = query.trim();
        self.species
            .iter()
            .find(|s| {
                s.id.as_str().eq_ignore_ascii_case(query) || s.name.eq_ignore_ascii_case(query)
            })
            .ok_or_else(|| DomainError::not_found("Species", query))
    }

    /// Species whose habitat includes the zone
    pub fn species_for_zone<'a>(
        &'a self,
        zone: &'a Zone,
    ) -> impl Iterator<Item = &'a SpeciesProfile> {
        self.species
            .iter()
            .filter(move |s| s.habitat_zones.iter().any(|r| zone.is_referenced_by(r)))
    }

    /// Calendar entry of a species, if it is regulated
    #[must_use]
    pub fn calendar_entry(&self, species: &SpeciesProfile) -> Option<&CalendarEntry> {
        self.calendar.iter().find(|e| e.species == species.id)
    }

    /// Every calendar entry with its status on `today`
    #[must_use]
    pub fn calendar_status(&self, today: NaiveDate) -> Vec<(&CalendarEntry, SeasonStatus)> {
        self.calendar
            .iter()
            .map(|entry| (entry, entry.status_on(today)))
            .collect()
    }
}
