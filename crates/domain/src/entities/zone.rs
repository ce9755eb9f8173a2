//! Zone entity - A named fishing location with its climatological profile

use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{GeoLocation, TemperatureRange, WaterBody, ZoneId},
};

/// A fishing zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Stable identifier used in species references and thermal keys
    pub id: ZoneId,
    /// Display name (e.g. "Lago Maggiore - Lombardia")
    pub name: String,
    /// Coordinates used for weather lookups
    pub location: GeoLocation,
    /// Kind of water body
    pub water_body: WaterBody,
    /// Climatological water temperature for each month, January first
    pub monthly_water_temp: [f64; 12],
    /// Realistic bounds for the estimated water temperature
    pub water_temp_range: TemperatureRange,
}

impl Zone {
    /// Climatological water temperature for a month (1 = January)
    ///
    /// Out-of-range months are clamped to December or January.
    #[must_use]
    pub fn seasonal_base(&self, month: u32) -> f64 {
        let index = month.clamp(1, 12) as usize - 1;
        self.monthly_water_temp[index]
    }

    /// Whether a species habitat or preference entry refers to this zone
    ///
    /// A reference matches either the zone id or a fragment of the display
    /// name, compared case-insensitively.
    #[must_use]
    pub fn is_referenced_by(&self, reference: &str) -> bool {
        let reference = reference.trim();
        if reference.is_empty() {
            return false;
        }
        if self.id.as_str().eq_ignore_ascii_case(reference) {
            return true;
        }
        self.name
            .to_lowercase()
            .contains(&reference.to_lowercase())
    }

    /// Whether the query names this zone by id or full name
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        self.id.as_str().eq_ignore_ascii_case(query) || self.name.eq_ignore_ascii_case(query)
    }

    /// Check the climatology against the realistic range
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the name is blank or any monthly value is
    /// non-finite or outside `water_temp_range`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_catalog(format!(
                "zone '{}' has an empty name",
                self.id
            )));
        }
        for (index, value) in self.monthly_water_temp.iter().enumerate() {
            if !value.is_finite() || !self.water_temp_range.contains(*value) {
                return Err(DomainError::invalid_catalog(format!(
                    "zone '{}' month {} climatology {value} is outside [{}, {}]",
                    self.id,
                    index + 1,
                    self.water_temp_range.min(),
                    self.water_temp_range.max()
                )));
            }
        }
        Ok(())
    }
}
