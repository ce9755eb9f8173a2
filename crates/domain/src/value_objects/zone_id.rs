//! Zone identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a fishing zone (e.g. `oleggio`)
///
/// Identifiers are trimmed and never empty. They double as references from
/// species profiles, where a reference may also be a fragment of a zone's
/// display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId(String);

impl ZoneId {
    /// Create a validated zone identifier
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the identifier is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "zone id must not be empty".to_string(),
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

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ZoneId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoneId> for String {
    fn from(id: ZoneId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let id = ZoneId::new("  oleggio ").unwrap();
        assert_eq!(id.as_str(), "oleggio");
    }

    #[test]
    fn rejects_blank() {
        assert!(ZoneId::new("").is_err());
        assert!(ZoneId::new("   ").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let id: ZoneId = serde_json::from_str("\"panperduto\"").unwrap();
        assert_eq!(id.to_string(), "panperduto");
        assert!(serde_json::from_str::<ZoneId>("\"\"").is_err());
    }
}
