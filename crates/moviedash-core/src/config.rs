//! `MovieDash` Configuration Module
//!
//! Provides configuration file support via `moviedash.toml`, environment variables,
//! and command-line overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Command-line flags (server, CLI)
//! 2. Environment variables (`MOVIEDASH_*`, `__` separates sections)
//! 3. Configuration file (`moviedash.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::views::{DEFAULT_DIRECTOR_LIMIT, DEFAULT_TOP_N};

/// Upper bound for any configured row limit; the dataset is a top-250 list.
pub const MAX_ROW_LIMIT: usize = 250;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },

    /// Failed to render configuration.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}

/// Dataset source section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the movie ratings CSV.
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "movie_ratings.csv".to_string(),
        }
    }
}

/// Dashboard presentation section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Lower end of the year slider's initial selection.
    pub default_year_start: i32,
    /// Upper end of the year slider's initial selection.
    pub default_year_end: i32,
    /// Rows shown in the top-rated and top box-office tables.
    pub top_n: usize,
    /// Rows shown in the director frequency chart.
    pub director_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_year_start: 2000,
            default_year_end: 2025,
            top_n: DEFAULT_TOP_N,
            director_limit: DEFAULT_DIRECTOR_LIMIT,
        }
    }
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address.
    pub host: String,
    /// Port number.
    pub port: u16,
    /// Enable permissive CORS.
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_enabled: false,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
    /// Log format: text or json.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Main `MovieDash` configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MovieDashConfig {
    /// Dataset source.
    pub data: DataConfig,
    /// Dashboard presentation.
    pub dashboard: DashboardConfig,
    /// Server configuration.
    pub server: ServerConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl MovieDashConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("moviedash.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("MOVIEDASH_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "data.path".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        let dashboard = &self.dashboard;
        if !(1..=MAX_ROW_LIMIT).contains(&dashboard.top_n) {
            return Err(ConfigError::InvalidValue {
                key: "dashboard.top_n".to_string(),
                message: format!(
                    "value {} is out of range [1, {MAX_ROW_LIMIT}]",
                    dashboard.top_n
                ),
            });
        }

        if !(1..=MAX_ROW_LIMIT).contains(&dashboard.director_limit) {
            return Err(ConfigError::InvalidValue {
                key: "dashboard.director_limit".to_string(),
                message: format!(
                    "value {} is out of range [1, {MAX_ROW_LIMIT}]",
                    dashboard.director_limit
                ),
            });
        }

        if dashboard.default_year_start > dashboard.default_year_end {
            return Err(ConfigError::InvalidValue {
                key: "dashboard.default_year_start".to_string(),
                message: format!(
                    "value {} is after default_year_end {}",
                    dashboard.default_year_start, dashboard.default_year_end
                ),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.port".to_string(),
                message: "value 0 is not a valid port".to_string(),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        Ok(())
    }
}
