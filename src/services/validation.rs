//! Allow-list and allow-range checks for provided values.

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::NumberConstraint;

/// Check a coerced number. `raw` is reported on failure.
pub fn validate_number(
    key: &str,
    raw: &str,
    value: f64,
    constraint: &NumberConstraint,
) -> ConfigResult<()> {
    match constraint {
        NumberConstraint::List(allowed) if !allowed.contains(&value) => {
            Err(ConfigError::list_value(key, raw, allowed.as_slice()))
        }
        NumberConstraint::Range(range) if !range.contains(value) => {
            Err(ConfigError::range_value(key, raw, *range))
        }
        _ => Ok(()),
    }
}

pub fn validate_string(key: &str, value: &str, allow_list: Option<&[String]>) -> ConfigResult<()> {
    match allow_list {
        Some(allowed) if !allowed.iter().any(|candidate| candidate == value) => {
            Err(ConfigError::list_value(key, value, allowed))
        }
        _ => Ok(()),
    }
}
