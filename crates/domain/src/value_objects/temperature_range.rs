//! Closed temperature interval in degrees Celsius

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Inclusive `[min, max]` temperature interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct TemperatureRange {
    min: f64,
    max: f64,
}

impl TemperatureRange {
    /// Create a validated range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if either bound is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::ValidationError(
                "temperature bounds must be finite".to_string(),
            ));
        }
        if min > max {
            return Err(DomainError::ValidationError(format!(
                "temperature range is inverted: {min} > {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies inside the range (bounds included)
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp `value` into the range
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl TryFrom<[f64; 2]> for TemperatureRange {
    type Error = DomainError;

    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<TemperatureRange> for [f64; 2] {
    fn from(range: TemperatureRange) -> Self {
        [range.min, range.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_values_inside() {
        let range = TemperatureRange::new(4.0, 23.0).unwrap();
        assert!((range.clamp(30.0) - 23.0).abs() < f64::EPSILON);
        assert!((range.clamp(-3.0) - 4.0).abs() < f64::EPSILON);
        assert!((range.clamp(12.5) - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(TemperatureRange::new(25.0, 5.0).is_err());
        assert!(TemperatureRange::new(f64::NAN, 5.0).is_err());
    }

    #[test]
    fn deserializes_from_pair() {
        let range: TemperatureRange = serde_json::from_str("[5.0, 25.0]").unwrap();
        assert!(range.contains(5.0));
        assert!(range.contains(25.0));
        assert!(!range.contains(25.1));
    }
}
