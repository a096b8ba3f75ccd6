use crate::core::{CrudError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub logging: Option<LoggingConfig>,
}

/// Connection settings used by [`crate::core::db::Database::connect`].
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:"
    pub path: String,
    /// When false, a missing database file is a connection error
    pub create_if_missing: Option<bool>,
    pub foreign_keys: Option<bool>,
    /// Driver-level busy timeout in milliseconds
    pub busy_timeout_ms: Option<u64>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: "players.db".to_string(),
            create_if_missing: Some(true),
            foreign_keys: Some(true),
            busy_timeout_ms: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error"
    pub level: Option<String>,
}

impl Config {
    /// Maximum tracing level, defaulting to INFO.
    pub fn log_level(&self) -> Result<tracing::Level> {
        match self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            Some(level) => level
                .parse()
                .map_err(|_| CrudError::Config(format!("invalid log level: {}", level))),
            None => Ok(tracing::Level::INFO),
        }
    }
}

/// Loads configuration from a TOML file at the given path.
///
/// # Example
///
/// ```no_run
/// let config = tablecrud::config::load_config("config.toml")?;
/// println!("{:?}", config);
/// # Ok::<(), tablecrud::core::CrudError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CrudError::Config(e.to_string()))
}

/// Location of the per-user configuration file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tablecrud").join("config.toml"))
}
