use crate::domain::errors::ConfigResult;
use crate::domain::models::{NumberArrayOptions, StringArrayOptions};
use crate::domain::ports::ReadEnv;

use super::coercion::coerce_number;
use super::env_reader::EnvReader;
use super::validation::{validate_number, validate_string};

impl<E: ReadEnv> EnvReader<E> {
    /// Elements are validated left to right; the first rejected element is
    /// reported. An absent variable with `AllowUndefined` yields an empty `Vec`.
    pub fn get_number_array(&self, key: &str, options: NumberArrayOptions) -> ConfigResult<Vec<f64>> {
        let (key, value) = self.read(key);
        let Some(raw) = value else {
            return options
                .fallback
                .resolve_absent(&key)
                .map(Option::unwrap_or_default);
        };

        self.split(&raw)
            .map(|element| -> ConfigResult<f64> {
                let number = coerce_number(element);
                validate_number(&key, element, number, &options.constraint)?;
                Ok(number)
            })
            .collect()
    }

    /// Elements are kept verbatim, including surrounding whitespace.
    pub fn get_string_array(
        &self,
        key: &str,
        options: StringArrayOptions,
    ) -> ConfigResult<Vec<String>> {
        let (key, value) = self.read(key);
        let Some(raw) = value else {
            return options
                .fallback
                .resolve_absent(&key)
                .map(Option::unwrap_or_default);
        };

        let allow_list = options.allow_list.as_deref();
        self.split(&raw)
            .map(|element| -> ConfigResult<String> {
                validate_string(&key, element, allow_list)?;
                Ok(element.to_string())
            })
            .collect()
    }
}
