//! Domain errors for typed environment access.

use std::fmt;

use thiserror::Error;

/// Values an environment variable was allowed to take.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowList {
    Numbers(Vec<f64>),
    Strings(Vec<String>),
}

impl AllowList {
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Strings(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = match self {
            Self::Numbers(values) => values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Strings(values) => values.join(", "),
        };
        write!(f, "[{joined}]")
    }
}

impl From<Vec<f64>> for AllowList {
    fn from(values: Vec<f64>) -> Self {
        Self::Numbers(values)
    }
}

impl From<&[f64]> for AllowList {
    fn from(values: &[f64]) -> Self {
        Self::Numbers(values.to_vec())
    }
}

impl From<Vec<String>> for AllowList {
    fn from(values: Vec<String>) -> Self {
        Self::Strings(values)
    }
}

impl From<&[String]> for AllowList {
    fn from(values: &[String]) -> Self {
        Self::Strings(values.to_vec())
    }
}

impl From<Vec<&str>> for AllowList {
    fn from(values: Vec<&str>) -> Self {
        Self::Strings(values.into_iter().map(str::to_owned).collect())
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllowRange {
    pub min: f64,
    pub max: f64,
}

impl AllowRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `NaN` is never contained.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for AllowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl From<(f64, f64)> for AllowRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Discriminant of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    NotDefined,
    Value,
    ListValue,
    RangeValue,
}

impl ConfigErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotDefined => "NotDefinedConfigError",
            Self::Value => "ValueConfigError",
            Self::ListValue => "ListValueConfigError",
            Self::RangeValue => "RangeValueConfigError",
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons an environment variable could not be turned into a usable value.
///
/// Rejected values are kept as the raw string read from the environment. For
/// array accessors this is the offending element, not the whole variable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("environment variable `{key}` is not defined")]
    NotDefined { key: String },

    #[error("environment variable `{key}` value \"{value}\" is not allowed")]
    Value { key: String, value: String },

    #[error("environment variable `{key}` value \"{value}\" is not in the allow list {allowed}")]
    ListValue {
        key: String,
        value: String,
        allowed: AllowList,
    },

    #[error("environment variable `{key}` value \"{value}\" is outside the allowed range {range}")]
    RangeValue {
        key: String,
        value: String,
        range: AllowRange,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub fn not_defined(key: impl Into<String>) -> Self {
        Self::NotDefined { key: key.into() }
    }

    pub fn value(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::Value {
            key: key.into(),
            value: value.to_string(),
        }
    }

    pub fn list_value(
        key: impl Into<String>,
        value: impl fmt::Display,
        allowed: impl Into<AllowList>,
    ) -> Self {
        Self::ListValue {
            key: key.into(),
            value: value.to_string(),
            allowed: allowed.into(),
        }
    }

    pub fn range_value(
        key: impl Into<String>,
        value: impl fmt::Display,
        range: impl Into<AllowRange>,
    ) -> Self {
        Self::RangeValue {
            key: key.into(),
            value: value.to_string(),
            range: range.into(),
        }
    }

    pub const fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::NotDefined { .. } => ConfigErrorKind::NotDefined,
            Self::Value { .. } => ConfigErrorKind::Value,
            Self::ListValue { .. } => ConfigErrorKind::ListValue,
            Self::RangeValue { .. } => ConfigErrorKind::RangeValue,
        }
    }

    /// Key of the variable that failed.
    pub fn key(&self) -> &str {
        match self {
            Self::NotDefined { key }
            | Self::Value { key, .. }
            | Self::ListValue { key, .. }
            | Self::RangeValue { key, .. } => key,
        }
    }

    /// Raw value that was rejected, absent for [`ConfigError::NotDefined`].
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            Self::NotDefined { .. } => None,
            Self::Value { value, .. }
            | Self::ListValue { value, .. }
            | Self::RangeValue { value, .. } => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_defined_message() {
        let err = ConfigError::not_defined("TEST_NUMBER");
        assert_eq!(
            err.to_string(),
            "environment variable `TEST_NUMBER` is not defined"
        );
        assert_eq!(err.kind(), ConfigErrorKind::NotDefined);
        assert_eq!(err.key(), "TEST_NUMBER");
        assert!(err.rejected_value().is_none());
    }

    #[test]
    fn test_value_message() {
        let err = ConfigError::value("TEST_STRING", "baz");
        assert_eq!(
            err.to_string(),
            "environment variable `TEST_STRING` value \"baz\" is not allowed"
        );
        assert_eq!(err.kind().name(), "ValueConfigError");
    }

    #[test]
    fn test_list_value_message_formats_numbers() {
        let err = ConfigError::list_value("TEST_NUMBER", 30.33, vec![10.0, 20.0]);
        assert_eq!(
            err.to_string(),
            "environment variable `TEST_NUMBER` value \"30.33\" is not in the allow list [10, 20]"
        );
        assert_eq!(err.rejected_value(), Some("30.33"));
    }

    #[test]
    fn test_list_value_message_formats_strings() {
        let err = ConfigError::list_value("TEST_STRING", "baz", vec!["foo", "bar"]);
        assert_eq!(
            err.to_string(),
            "environment variable `TEST_STRING` value \"baz\" is not in the allow list [foo, bar]"
        );
    }

    #[test]
    fn test_range_value_message() {
        let err = ConfigError::range_value("TEST_NUMBER", "20.00001", (10.0, 20.0));
        assert_eq!(
            err.to_string(),
            "environment variable `TEST_NUMBER` value \"20.00001\" is outside the allowed range [10, 20]"
        );
        assert_eq!(err.kind(), ConfigErrorKind::RangeValue);
    }

    #[test]
    fn test_errors_compare_by_fields() {
        assert_eq!(
            ConfigError::list_value("K", "a", vec!["b"]),
            ConfigError::list_value("K", "a", vec!["b".to_string()])
        );
        assert_ne!(
            ConfigError::list_value("K", "a", vec!["b"]),
            ConfigError::list_value("K", "a", vec!["c"])
        );
        assert_ne!(
            ConfigError::not_defined("K"),
            ConfigError::value("K", "")
        );
    }

    #[test]
    fn test_range_is_inclusive_and_rejects_nan() {
        let range = AllowRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.000_01));
        assert!(!range.contains(f64::NAN));
    }
}
