use std::env;

use crate::domain::ports::ReadEnv;

/// Zero-sized type, delegates to `std::env`.
///
/// Values that are not valid Unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
