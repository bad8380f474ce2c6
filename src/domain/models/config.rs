use serde::{Deserialize, Serialize};

/// Delimiter used by array accessors unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = ",";

/// Top-level settings for envtype
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// How keys are looked up and array values are split
    #[serde(default)]
    pub reader: ReaderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReaderConfig {
    /// Prepended to every key before lookup (e.g. `APP_`)
    #[serde(default)]
    pub prefix: String,

    /// Separator between array elements
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            delimiter: default_delimiter(),
        }
    }
}

impl ReaderConfig {
    /// Full key looked up for `key`.
    pub fn qualify(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{key}", self.prefix)
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.reader.prefix, "");
        assert_eq!(settings.reader.delimiter, ",");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_qualify_key() {
        let mut config = ReaderConfig::default();
        assert_eq!(config.qualify("PORT"), "PORT");

        config.prefix = "APP_".to_string();
        assert_eq!(config.qualify("PORT"), "APP_PORT");
    }

    #[test]
    fn test_yaml_partial_settings() {
        let yaml = r"
reader:
  delimiter: ';'
logging:
  format: pretty
";
        let settings: Settings = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(settings.reader.delimiter, ";");
        assert_eq!(settings.reader.prefix, "");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }
}
