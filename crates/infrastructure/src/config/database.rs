//! Thermal state storage configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where thermal states are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file, survives restarts
    #[default]
    Sqlite,
    /// Process memory, lost on exit
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!(
                "Invalid storage backend: {s}. Use 'sqlite' or 'memory'"
            )),
        }
    }
}

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Storage backend for thermal states
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path to the SQLite database file (`:memory:` for a throwaway database)
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Whether to run pending migrations on startup (default: true)
    #[serde(default = "super::default_true")]
    pub run_migrations: bool,
}

fn default_db_path() -> String {
    "pesca.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_db_path(),
            max_connections: default_max_connections(),
            run_migrations: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.path, "pesca.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
    }

    #[test]
    fn storage_backend_from_str() {
        assert_eq!("sqlite".parse::<StorageBackend>().unwrap(), StorageBackend::Sqlite);
        assert_eq!("MEMORY".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn storage_backend_display() {
        assert_eq!(StorageBackend::Memory.to_string(), "memory");
    }
}
