//! Species identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a fish species (e.g. `trota_fario`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpeciesId(String);

impl SpeciesId {
    /// Create a validated species identifier
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the identifier is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "species id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SpeciesId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeciesId> for String {
    fn from(id: SpeciesId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_id_round_trips_through_display() {
        let id = SpeciesId::new("luccio").unwrap();
        assert_eq!(id.to_string(), "luccio");
    }

    #[test]
    fn blank_species_id_is_rejected() {
        assert!(SpeciesId::new(" ").is_err());
    }
}
