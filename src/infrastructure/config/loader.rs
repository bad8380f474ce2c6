use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::{ReaderConfig, Settings};

/// Project settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "envtype.yaml";

/// Prefix of environment variables overriding settings
pub const ENV_PREFIX: &str = "ENVTYPE_";

/// Settings validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Array delimiter cannot be empty")]
    EmptyDelimiter,

    #[error("Invalid key prefix: {0:?}. Must not contain '=' or NUL")]
    InvalidPrefix(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `envtype.yaml` in the working directory (optional)
    /// 3. Environment variables (`ENVTYPE_*` prefix, `__` for nesting)
    pub fn load() -> Result<Settings> {
        Self::load_from_file(SETTINGS_FILE)
    }

    /// Load settings from a specific file, still honouring `ENVTYPE_*` overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let path = path.as_ref();
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;

        Self::validate(&settings)?;
        tracing::debug!(
            path = %path.display(),
            prefix = %settings.reader.prefix,
            delimiter = %settings.reader.delimiter,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        Self::validate_reader(&settings.reader)?;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(
                settings.logging.level.clone(),
            ));
        }

        Ok(())
    }

    /// Validate the reader part of the settings
    pub fn validate_reader(reader: &ReaderConfig) -> Result<(), SettingsError> {
        if reader.delimiter.is_empty() {
            return Err(SettingsError::EmptyDelimiter);
        }

        if reader.prefix.contains(['=', '\0']) {
            return Err(SettingsError::InvalidPrefix(reader.prefix.clone()));
        }

        Ok(())
    }
}
