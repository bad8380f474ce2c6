use crate::domain::models::ReaderConfig;
use crate::domain::ports::ReadEnv;
use crate::infrastructure::config::{SettingsError, SettingsLoader};
use crate::infrastructure::env::SystemEnv;
use crate::infrastructure::logging::SecretScrubber;

/// Typed access to one environment table
///
/// Every accessor performs exactly one lookup. Empty values are treated as
/// if the variable were not set.
#[derive(Debug, Clone)]
pub struct EnvReader<E> {
    env: E,
    config: ReaderConfig,
}

impl EnvReader<SystemEnv> {
    /// Reader over the process environment with default settings
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ReadEnv> EnvReader<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            config: ReaderConfig::default(),
        }
    }

    /// Reader with a key prefix and/or a custom array delimiter
    pub fn with_config(env: E, config: ReaderConfig) -> Result<Self, SettingsError> {
        SettingsLoader::validate_reader(&config)?;
        Ok(Self { env, config })
    }

    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub const fn env(&self) -> &E {
        &self.env
    }

    /// Qualified key and its value, `None` when unset or empty
    pub(crate) fn read(&self, key: &str) -> (String, Option<String>) {
        let key = self.config.qualify(key);
        let value = self.env.lookup(&key).filter(|value| !value.is_empty());

        match value.as_deref() {
            Some(raw) => tracing::trace!(
                key = %key,
                value = %SecretScrubber::shared().redact_value(&key, raw),
                "environment variable provided"
            ),
            None => tracing::trace!(key = %key, "environment variable not provided"),
        }

        (key, value)
    }

    /// Elements of an array value, in source order
    pub(crate) fn split<'a>(&'a self, raw: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        raw.split(self.config.delimiter.as_str())
    }
}

impl Default for EnvReader<SystemEnv> {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::env::InMemoryEnv;

    #[test]
    fn test_empty_value_reads_as_absent() {
        let env: InMemoryEnv = [("EMPTY", ""), ("SET", "x")].into_iter().collect();
        let reader = EnvReader::new(&env);

        assert_eq!(reader.read("EMPTY"), ("EMPTY".to_string(), None));
        assert_eq!(reader.read("SET"), ("SET".to_string(), Some("x".to_string())));
        assert_eq!(reader.read("MISSING"), ("MISSING".to_string(), None));
    }

    #[test]
    fn test_prefix_is_applied() {
        let env: InMemoryEnv = [("APP_PORT", "8080")].into_iter().collect();
        let config = ReaderConfig {
            prefix: "APP_".to_string(),
            ..ReaderConfig::default()
        };
        let reader = EnvReader::with_config(&env, config).expect("valid config");

        assert_eq!(
            reader.read("PORT"),
            ("APP_PORT".to_string(), Some("8080".to_string()))
        );
    }

    #[test]
    fn test_with_config_rejects_empty_delimiter() {
        let config = ReaderConfig {
            delimiter: String::new(),
            ..ReaderConfig::default()
        };

        assert_eq!(
            EnvReader::with_config(InMemoryEnv::new(), config).unwrap_err(),
            SettingsError::EmptyDelimiter
        );
    }

    #[test]
    fn test_split_keeps_whitespace_and_empty_elements() {
        let reader = EnvReader::new(InMemoryEnv::new());

        assert_eq!(reader.split("a, b").collect::<Vec<_>>(), vec!["a", " b"]);
        assert_eq!(reader.split("a,,b").collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_with_custom_delimiter() {
        let config = ReaderConfig {
            delimiter: "::".to_string(),
            ..ReaderConfig::default()
        };
        let reader = EnvReader::with_config(InMemoryEnv::new(), config).expect("valid config");

        assert_eq!(reader.split("a::b,c").collect::<Vec<_>>(), vec!["a", "b,c"]);
    }
}
