//! Configuration management for utm33.
//!
//! Configuration is layered with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, Utm33Error};
use crate::grid::GRANULARITY;
use crate::logging;

/// Environment variable overriding [`Config::log_level`]
pub const ENV_LOG_LEVEL: &str = "UTM33_LOG_LEVEL";

/// Environment variable overriding [`Config::table_path`]
pub const ENV_TABLE: &str = "UTM33_TABLE";

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spacing in meters of the sample table to load
    #[serde(default = "default_granularity")]
    pub granularity: i64,

    /// JSON sample table to use instead of the embedded Kartverket table
    #[serde(default)]
    pub table_path: Option<PathBuf>,

    /// Log level for the default subscriber installed by
    /// [`Config::init_tracing`]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_file {
            config = Self::load_from_file(path)?;
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides from a key lookup such as the process environment
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(path) = lookup(ENV_TABLE) {
            self.table_path = Some(PathBuf::from(path));
        }
    }

    /// Install the default tracing subscriber at [`Config::log_level`].
    ///
    /// The level is validated first, so a bad value never reaches the
    /// global subscriber.
    pub fn init_tracing(&self) -> Result<()> {
        self.validate()?;
        logging::init_tracing(&self.log_level)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.granularity <= 0 {
            return Err(Utm33Error::Config {
                message: format!("Granularity must be positive, got {}", self.granularity),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(Utm33Error::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if let Some(path) = &self.table_path {
            if path.as_os_str().is_empty() {
                return Err(Utm33Error::Config {
                    message: "Table path cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            granularity: default_granularity(),
            table_path: None,
            log_level: default_log_level(),
        }
    }
}

// Default value functions for serde
fn default_granularity() -> i64 {
    GRANULARITY
}

fn default_log_level() -> String {
    "info".to_string()
}
