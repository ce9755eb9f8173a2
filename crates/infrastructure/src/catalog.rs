//! Catalog loading
//!
//! Reads zones, species profiles and the fishing calendar from a TOML
//! document. The Lombardy catalog is compiled into the binary; a file path
//! in [`CatalogConfig`] replaces it entirely.

use std::path::Path;

use domain::{
    DomainError,
    entities::{CalendarEntry, Catalog, SpeciesProfile, Zone},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::config::CatalogConfig;

/// Built-in catalog for the Ticino / Lago Maggiore area
pub const LOMBARDIA_CATALOG: &str = include_str!("../catalog/lombardia.toml");

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    zones: Vec<Zone>,
    #[serde(default)]
    species: Vec<SpeciesProfile>,
    #[serde(default)]
    calendar: Vec<CalendarEntry>,
}

/// Parse and validate a catalog document
pub fn parse_catalog(source: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument = toml::from_str(source)?;
    debug!(
        zones = document.zones.len(),
        species = document.species.len(),
        calendar = document.calendar.len(),
        "Parsed catalog document"
    );
    Ok(Catalog::new(
        document.zones,
        document.species,
        document.calendar,
    )?)
}

/// Load the configured catalog, or the built-in one
#[instrument(skip(config), fields(path = ?config.path))]
pub fn load_catalog(config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let Some(path) = config.path.as_deref() else {
        debug!("Using built-in Lombardy catalog");
        return parse_catalog(LOMBARDIA_CATALOG);
    };

    let source = std::fs::read_to_string(Path::new(path)).map_err(|source| CatalogError::Io {
        path: path.to_string(),
        source,
    })?;
    let catalog = parse_catalog(&source)?;
    info!(path, zones = catalog.zones().len(), "Loaded catalog from file");
    Ok(catalog)
}
