//! Accessors over the process environment.
//!
//! Each function builds a default [`EnvReader`] over [`SystemEnv`] and
//! performs a single lookup. Use [`EnvReader`] directly for a key prefix, a
//! custom array delimiter or a different environment table.

use crate::domain::errors::ConfigResult;
use crate::domain::models::{
    BooleanOptions, NumberArrayOptions, NumberOptions, StringArrayOptions, StringOptions,
};
use crate::infrastructure::env::SystemEnv;

use super::env_reader::EnvReader;

/// Read `key` from the process environment as a boolean.
///
/// ```
/// use envtype::{get_boolean, BooleanOptions};
///
/// let debug = get_boolean("ENVTYPE_DOC_DEBUG", BooleanOptions::new().with_default(false))?;
/// assert_eq!(debug, Some(false));
/// # Ok::<(), envtype::ConfigError>(())
/// ```
pub fn get_boolean(key: &str, options: BooleanOptions) -> ConfigResult<Option<bool>> {
    EnvReader::new(SystemEnv).get_boolean(key, options)
}

/// Read `key` from the process environment as a number.
pub fn get_number(key: &str, options: NumberOptions) -> ConfigResult<Option<f64>> {
    EnvReader::new(SystemEnv).get_number(key, options)
}

/// Read `key` from the process environment as a string.
pub fn get_string(key: &str, options: StringOptions) -> ConfigResult<Option<String>> {
    EnvReader::new(SystemEnv).get_string(key, options)
}

/// Read `key` from the process environment as comma separated numbers.
pub fn get_number_array(key: &str, options: NumberArrayOptions) -> ConfigResult<Vec<f64>> {
    EnvReader::new(SystemEnv).get_number_array(key, options)
}

/// Read `key` from the process environment as comma separated strings.
pub fn get_string_array(key: &str, options: StringArrayOptions) -> ConfigResult<Vec<String>> {
    EnvReader::new(SystemEnv).get_string_array(key, options)
}
