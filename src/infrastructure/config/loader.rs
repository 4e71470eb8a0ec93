use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Default project-local configuration file.
pub const DEFAULT_CONFIG_PATH: &str = ".lbaas/config.yaml";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid endpoint URL '{0}': must start with http:// or https://")]
    InvalidUrl(String),

    #[error("No auth token configured; pass --os-token, set OS_TOKEN or endpoint.token")]
    MissingToken,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Values given on the command line, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub token: Option<String>,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. The YAML file at `path` (optional)
    /// 3. Environment variables (LBAAS_* prefix, `__` separates sections)
    /// 4. Command-line overrides
    pub fn load(path: impl AsRef<Path>, overrides: &ConfigOverrides) -> Result<Config> {
        let path = path.as_ref();
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("LBAAS_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if let Some(url) = &overrides.url {
            config.endpoint.url.clone_from(url);
        }
        if let Some(token) = &overrides.token {
            config.endpoint.token = Some(token.clone());
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let url = &config.endpoint.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.clone()));
        }

        if config.endpoint.token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingToken);
        }

        if config.endpoint.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.endpoint.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
