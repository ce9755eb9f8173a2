//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{entities::WeatherReading, value_objects::GeoLocation, ZoneId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather readings of a fishing zone
///
/// Adapters are expected to degrade gracefully: when the provider is
/// unreachable they return a synthetic reading with `is_live == false`
/// instead of an error. An `Err` means no reading could be produced at all.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions and upcoming hours at a location
    ///
    /// # Arguments
    /// * `zone_id` - Zone the reading is for (seeds synthetic fallbacks)
    /// * `location` - Coordinates to query
    /// * `now` - Zone-local time of the request
    async fn current_conditions(
        &self,
        zone_id: &ZoneId,
        location: &GeoLocation,
        now: NaiveDateTime,
    ) -> Result<WeatherReading, ApplicationError>;
}
