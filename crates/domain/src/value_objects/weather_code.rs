//! WMO weather interpretation codes
//!
//! See <https://open-meteo.com/en/docs> for the code table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw WMO weather code as reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(u8);

/// Coarse weather category used by the activity scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    /// Clear or mainly clear sky (WMO 0, 1)
    Clear,
    /// Cloud cover and every code without its own category
    /// (fog, snow, freezing precipitation, codes outside the table)
    Clouds,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Rain and rain showers (WMO 61, 63, 65, 80-82)
    Rain,
    /// Thunderstorm (WMO 95, 96, 99)
    Thunderstorm,
}

impl WeatherCode {
    /// Clear sky
    pub const CLEAR_SKY: Self = Self(0);
    /// Mainly clear
    pub const MAINLY_CLEAR: Self = Self(1);
    /// Partly cloudy
    pub const PARTLY_CLOUDY: Self = Self(2);
    /// Overcast
    pub const OVERCAST: Self = Self(3);
    /// Fog
    pub const FOG: Self = Self(45);
    /// Light drizzle
    pub const LIGHT_DRIZZLE: Self = Self(51);
    /// Light rain
    pub const LIGHT_RAIN: Self = Self(61);
    /// Thunderstorm
    pub const THUNDERSTORM: Self = Self(95);

    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Sky is clear enough for direct solar heating (WMO 0, 1)
    #[must_use]
    pub const fn is_clear_sky(self) -> bool {
        matches!(self.0, 0 | 1)
    }

    /// Rain that cools the surface layer of the water
    #[must_use]
    pub const fn is_cooling_rain(self) -> bool {
        matches!(self.0, 61 | 63 | 65 | 80..=82)
    }

    /// Rain or storms that feed rivers and raise lake levels
    #[must_use]
    pub const fn raises_water_level(self) -> bool {
        matches!(self.0, 61 | 63 | 65 | 80..=82 | 95 | 96 | 99)
    }

    /// Coarse category of the code
    #[must_use]
    pub const fn category(self) -> WeatherCategory {
        match self.0 {
            0 | 1 => WeatherCategory::Clear,
            2 | 3 => WeatherCategory::Clouds,
            51 | 53 | 55 => WeatherCategory::Drizzle,
            61 | 63 | 65 | 80..=82 => WeatherCategory::Rain,
            95 | 96 | 99 => WeatherCategory::Thunderstorm,
            _ => WeatherCategory::Clouds,
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 | 57 => "Freezing drizzle",
            61 => "Light rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 | 67 => "Freezing rain",
            71 | 73 | 75 => "Snow",
            77 => "Snow grains",
            80 => "Light rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 | 86 => "Snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with light hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Variable conditions",
        }
    }
}

impl From<u8> for WeatherCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl WeatherCategory {
    /// Categories in which fish feed normally and anglers go out
    #[must_use]
    pub const fn is_fair(self) -> bool {
        matches!(self, Self::Clear | Self::Clouds)
    }

    /// Categories that stir up food and make fish more active
    #[must_use]
    pub const fn is_wet(self) -> bool {
        matches!(self, Self::Drizzle | Self::Rain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky_codes() {
        assert!(WeatherCode::new(0).is_clear_sky());
        assert!(WeatherCode::new(1).is_clear_sky());
        assert!(!WeatherCode::new(2).is_clear_sky());
    }

    #[test]
    fn cooling_rain_excludes_drizzle_and_storms() {
        assert!(WeatherCode::new(63).is_cooling_rain());
        assert!(WeatherCode::new(81).is_cooling_rain());
        assert!(!WeatherCode::new(51).is_cooling_rain());
        assert!(!WeatherCode::new(95).is_cooling_rain());
    }

    #[test]
    fn storms_raise_water_level() {
        assert!(WeatherCode::new(99).raises_water_level());
        assert!(!WeatherCode::new(3).raises_water_level());
    }

    #[test]
    fn categories() {
        assert_eq!(WeatherCode::new(3).category(), WeatherCategory::Clouds);
        assert_eq!(WeatherCode::new(53).category(), WeatherCategory::Drizzle);
        assert_eq!(WeatherCode::new(82).category(), WeatherCategory::Rain);
        assert_eq!(WeatherCode::new(96).category(), WeatherCategory::Thunderstorm);
    }

    #[test]
    fn unlisted_codes_fall_back_to_clouds() {
        for code in [45, 48, 56, 57, 66, 67, 71, 77, 85, 86, 97, 200] {
            assert_eq!(
                WeatherCode::new(code).category(),
                WeatherCategory::Clouds,
                "code {code}"
            );
        }
    }

    #[test]
    fn fair_and_wet_are_disjoint() {
        assert!(WeatherCategory::Clear.is_fair());
        assert!(WeatherCategory::Rain.is_wet());
        assert!(!WeatherCategory::Thunderstorm.is_fair());
        assert!(!WeatherCategory::Thunderstorm.is_wet());
    }

    #[test]
    fn description_falls_back() {
        assert_eq!(WeatherCode::new(42).description(), "Variable conditions");
        assert_eq!(WeatherCode::new(61).to_string(), "Light rain");
    }
}
