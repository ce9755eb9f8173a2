//! Value Objects - Immutable, identity-less domain primitives

mod day_period;
mod geo_location;
mod moon_phase;
mod percentage;
mod season;
mod species_id;
mod temperature_range;
mod water_body;
mod weather_code;
mod zone_id;

pub use day_period::DayPeriod;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use moon_phase::MoonPhase;
pub use percentage::{InvalidPercentage, Percentage};
pub use season::Season;
pub use species_id::SpeciesId;
pub use temperature_range::TemperatureRange;
pub use water_body::WaterBody;
pub use weather_code::{WeatherCategory, WeatherCode};
pub use zone_id::ZoneId;
