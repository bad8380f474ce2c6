use crate::domain::errors::ConfigResult;
use crate::domain::models::{BooleanOptions, NumberOptions, StringOptions};
use crate::domain::ports::ReadEnv;

use super::coercion::{coerce_boolean, coerce_number};
use super::env_reader::EnvReader;
use super::validation::{validate_number, validate_string};

impl<E: ReadEnv> EnvReader<E> {
    /// `Some(true)` only when the variable is exactly `"true"`; any other
    /// provided value is `Some(false)`.
    pub fn get_boolean(&self, key: &str, options: BooleanOptions) -> ConfigResult<Option<bool>> {
        let (key, value) = self.read(key);
        match value {
            Some(raw) => Ok(Some(coerce_boolean(&raw))),
            None => options.fallback.resolve_absent(&key),
        }
    }

    /// Unparsable values become `NaN` and are only rejected by a constraint.
    pub fn get_number(&self, key: &str, options: NumberOptions) -> ConfigResult<Option<f64>> {
        let (key, value) = self.read(key);
        match value {
            Some(raw) => {
                let number = coerce_number(&raw);
                validate_number(&key, &raw, number, &options.constraint)?;
                Ok(Some(number))
            }
            None => options.fallback.resolve_absent(&key),
        }
    }

    pub fn get_string(&self, key: &str, options: StringOptions) -> ConfigResult<Option<String>> {
        let (key, value) = self.read(key);
        match value {
            Some(raw) => {
                validate_string(&key, &raw, options.allow_list.as_deref())?;
                Ok(Some(raw))
            }
            None => options.fallback.resolve_absent(&key),
        }
    }
}
