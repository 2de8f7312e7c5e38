//! Plugin settings loader

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::header::HeaderValue;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::ProviderSettings;

/// Prefix of environment variables that override plugin settings.
///
/// Nested keys are separated by `__`, e.g. `BAMBOO_PROVIDER_LOGGING__LEVEL`.
pub const SETTINGS_ENV_PREFIX: &str = "BAMBOO_PROVIDER_";

/// Settings validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `logging.level` is not a tracing level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `client.timeout_secs` is zero
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// `client.user_agent` is blank
    #[error("User agent cannot be empty")]
    EmptyUserAgent,

    /// `client.user_agent` cannot be sent as an HTTP header value
    #[error("Invalid user agent {0:?}: not a valid HTTP header value")]
    InvalidUserAgent(String),
}

/// Loads [`ProviderSettings`] with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML settings file, when a path is given
    /// 3. Environment variables (`BAMBOO_PROVIDER_*` prefix)
    pub fn load(path: Option<&Path>) -> Result<ProviderSettings> {
        let mut figment = Figment::new().merge(Serialized::defaults(ProviderSettings::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("Settings file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: ProviderSettings = figment
            .merge(Env::prefixed(SETTINGS_ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &ProviderSettings) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        if settings.client.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(settings.client.timeout_secs));
        }

        if settings.client.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }

        if HeaderValue::from_str(&settings.client.user_agent).is_err() {
            return Err(ConfigError::InvalidUserAgent(settings.client.user_agent.clone()));
        }

        Ok(())
    }
}
