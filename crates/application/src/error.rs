//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested zone or species does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error (storage, task join, ...)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }

    /// Whether the error reports a missing zone or species
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound { .. })
        )
    }

    /// Turn a catalog lookup miss into `NotFound`, keeping other domain errors
    pub(crate) fn from_lookup(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                Self::NotFound(format!("{entity_type} '{id}'"))
            },
            other => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_miss_becomes_not_found() {
        let err = ApplicationError::from_lookup(DomainError::not_found("Zone", "Como"));
        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: Zone 'Como'");
        assert!(err.is_not_found());
    }

    #[test]
    fn other_domain_errors_pass_through() {
        let err = ApplicationError::from_lookup(DomainError::invalid_catalog("bad"));
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.to_string(), "Invalid catalog: bad");
    }

    #[test]
    fn only_external_errors_are_retryable() {
        assert!(ApplicationError::ExternalService("timeout".into()).is_retryable());
        assert!(!ApplicationError::Internal("db".into()).is_retryable());
    }
}
