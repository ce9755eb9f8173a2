//! Forecast service
//!
//! Orchestrates one zone refresh: weather reading, water temperature,
//! lunar and seasonal context, then species ranking.

use std::{fmt, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use domain::{
    entities::{
        CalendarEntry, Catalog, HourlyOutlook, RankedSpecies, SeasonStatus, SpeciesProfile,
        WaterLevelTrend, WeatherSnapshot, Zone, ZoneOutlook,
    },
    services::{
        activity::{rank_species, ScoringContext},
        astro,
        thermal::ThermalTrace,
    },
    value_objects::{MoonPhase, Season, ZoneId},
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError, ports::WeatherPort, services::WaterTemperatureService,
};

/// Everything known about a zone after one refresh
#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
    pub zone_id: ZoneId,
    pub zone_name: String,
    pub generated_at: NaiveDateTime,
    pub snapshot: WeatherSnapshot,
    pub moon_phase: MoonPhase,
    /// Days since the last new moon
    pub moon_age: f64,
    pub season: Season,
    /// Habitat species, best first
    pub rankings: Vec<RankedSpecies>,
    pub outlook: ZoneOutlook,
    pub water_level_trend: WaterLevelTrend,
    pub hourly_outlook: HourlyOutlook,
    pub thermal_trace: ThermalTrace,
}

impl ZoneReport {
    /// Highest ranked species, if any lives in the zone
    #[must_use]
    pub fn best_species(&self) -> Option<&RankedSpecies> {
        self.rankings.first()
    }
}

/// A regulated species with its status on a day
#[derive(Debug, Clone, Serialize)]
pub struct CalendarRow {
    pub species_name: String,
    pub entry: CalendarEntry,
    pub status: SeasonStatus,
}

/// Service producing zone reports and calendar views
pub struct ForecastService {
    catalog: Arc<Catalog>,
    weather: Arc<dyn WeatherPort>,
    water: Arc<WaterTemperatureService>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("zones", &self.catalog.zones().len())
            .field("species", &self.catalog.species().len())
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        weather: Arc<dyn WeatherPort>,
        water: Arc<WaterTemperatureService>,
    ) -> Self {
        Self {
            catalog,
            weather,
            water,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a zone by id or name
    pub fn zone(&self, query: &str) -> Result<&Zone, ApplicationError> {
        self.catalog.zone(query).map_err(ApplicationError::from_lookup)
    }

    /// Species profiles, optionally only those living in a zone
    pub fn species(
        &self,
        zone_query: Option<&str>,
    ) -> Result<Vec<&SpeciesProfile>, ApplicationError> {
        match zone_query {
            Some(query) => {
                let zone = self.zone(query)?;
                Ok(self.catalog.species_for_zone(zone).collect())
            },
            None => Ok(self.catalog.species().iter().collect()),
        }
    }

    /// Refresh one zone and rank its species
    ///
    /// `now` is the zone-local time used for the weather request, the
    /// thermal daily step, the moon phase and the hourly outlook.
    #[instrument(skip(self), fields(zone = %zone_query))]
    pub async fn zone_report(
        &self,
        zone_query: &str,
        now: NaiveDateTime,
    ) -> Result<ZoneReport, ApplicationError> {
        let zone = self.zone(zone_query)?;

        let reading = self
            .weather
            .current_conditions(&zone.id, &zone.location, now)
            .await?;
        if !reading.is_live {
            warn!(zone = %zone.id, "Using synthetic weather, live data unavailable");
        }

        let estimate = self.water.estimate(zone, &reading).await?;
        let snapshot =
            WeatherSnapshot::from_reading(zone.id.clone(), reading, estimate.water_temperature);

        let today = now.date();
        let ctx = ScoringContext {
            zone,
            snapshot: &snapshot,
            moon_phase: astro::moon_phase(today),
            season: astro::season(today),
        };
        let rankings = rank_species(self.catalog.species_for_zone(zone), &ctx, now.hour());
        let scores: Vec<u8> = rankings.iter().map(|r| r.score.value).collect();
        let outlook = ZoneOutlook::from_scores(&scores);

        info!(
            zone = %zone.id,
            water = snapshot.water_temperature(),
            species = rankings.len(),
            ?outlook,
            "Zone report ready"
        );

        Ok(ZoneReport {
            zone_id: zone.id.clone(),
            zone_name: zone.name.clone(),
            generated_at: now,
            moon_phase: ctx.moon_phase,
            moon_age: astro::moon_age(today),
            season: ctx.season,
            outlook,
            water_level_trend: snapshot.water_level_trend(),
            hourly_outlook: snapshot.hourly_outlook(now),
            thermal_trace: estimate.trace,
            rankings,
            snapshot,
        })
    }

    /// Every regulated species with its status on `today`
    #[must_use]
    pub fn calendar(&self, today: NaiveDate) -> Vec<CalendarRow> {
        self.catalog
            .calendar_status(today)
            .into_iter()
            .map(|(entry, status)| CalendarRow {
                species_name: self
                    .catalog
                    .species()
                    .iter()
                    .find(|s| s.id == entry.species)
                    .map_or_else(|| entry.species.to_string(), |s| s.name.clone()),
                entry: entry.clone(),
                status,
            })
            .collect()
    }
}
