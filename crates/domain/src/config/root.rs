use serde::{Deserialize, Serialize};
use std::path::Path;

use super::batch::{BatchConfig, MAX_CONCURRENCY};
use super::cache::{CacheConfig, MAX_TTL_SECS};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-lookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-lookup/config.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Lookup timeouts and stub resolver options
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Result cache sizing and TTL
    #[serde(default)]
    pub cache: CacheConfig,

    /// Batch fan-out limits
    #[serde(default)]
    pub batch: BatchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-lookup.toml in current directory
    /// 3. /etc/ferrous-lookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(concurrency) = overrides.max_concurrency {
            self.batch.max_concurrency = concurrency;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = file;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }
        if self.resolver.attempts == 0 {
            return Err(ConfigError::Validation(
                "Resolver attempts cannot be 0".to_string(),
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation("Cache TTL cannot be 0".to_string()));
        }
        if self.cache.ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "Cache TTL cannot exceed {} seconds",
                MAX_TTL_SECS
            )));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache max_entries cannot be 0".to_string(),
            ));
        }
        if self.batch.max_concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::Validation(format!(
                "Batch max_concurrency cannot exceed {}",
                MAX_CONCURRENCY
            )));
        }
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_timeout_ms: Option<u64>,
    pub max_concurrency: Option<usize>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}
