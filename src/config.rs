//! # Application Configuration
//!
//! Centralized configuration loaded from environment variables, validated
//! section by section before the application runs. The parser itself takes
//! no configuration; its rules and unit vocabulary are fixed by contract.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Local store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON store files
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".recipe-scanner"),
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level directive for this crate (trace, debug, info, warn, error)
    pub level: String,
    /// Output format: "pretty" for development, "json" for everything else
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LogConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> AppResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(AppError::Config(format!(
                    "LOG_LEVEL '{}' is not a valid level",
                    other
                )))
            }
        }

        match self.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(AppError::Config(format!(
                "LOG_FORMAT '{}' must be 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Local store configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(dir) = env::var("RECIPE_DATA_DIR") {
            if dir.trim().is_empty() {
                return Err(AppError::Config(
                    "RECIPE_DATA_DIR cannot be empty".to_string(),
                ));
            }
            config.storage.data_dir = PathBuf::from(dir);
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.log.level = level.to_lowercase();
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            config.log.format = format.to_lowercase();
        }

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.storage.validate()?;
        self.log.validate()?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: data_dir={}, log_level={}, log_format={}",
            self.storage.data_dir.display(),
            self.log.level,
            self.log.format
        )
    }
}
