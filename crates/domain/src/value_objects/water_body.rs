//! Kind of water body, which drives how strongly it reacts to heat

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hydrological kind of a fishing zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterBody {
    /// Fast, shallow river stretch (e.g. Panperduto)
    River,
    /// Slower lowland river (e.g. Ticino at Oleggio)
    LowlandRiver,
    /// Deep lake with high thermal inertia (e.g. Lago Maggiore)
    LargeLake,
    /// Shallow lake that warms and cools quickly (e.g. Lago di Varese)
    SmallLake,
}

impl WaterBody {
    /// Multiplier applied to accumulated heat in the zone response stage
    #[must_use]
    pub const fn heat_response(self) -> f64 {
        match self {
            Self::River => 1.2,
            Self::LowlandRiver => 1.1,
            Self::LargeLake => 0.7,
            Self::SmallLake => 1.4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::River => "river",
            Self::LowlandRiver => "lowland river",
            Self::LargeLake => "large lake",
            Self::SmallLake => "small lake",
        }
    }
}

impl fmt::Display for WaterBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_lakes_react_more_than_large_ones() {
        assert!(WaterBody::SmallLake.heat_response() > WaterBody::LargeLake.heat_response());
        assert!(WaterBody::River.heat_response() > WaterBody::LowlandRiver.heat_response());
    }

    #[test]
    fn deserializes_snake_case() {
        let kind: WaterBody = serde_json::from_str("\"lowland_river\"").unwrap();
        assert_eq!(kind, WaterBody::LowlandRiver);
    }
}
