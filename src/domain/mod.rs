//! Domain layer for typed environment access
//!
//! Error taxonomy, accessor options and the environment port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AllowList, AllowRange, ConfigError, ConfigErrorKind, ConfigResult};
