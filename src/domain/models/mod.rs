pub mod config;
pub mod options;

pub use config::{LogFormat, LoggingConfig, ReaderConfig, Settings, DEFAULT_DELIMITER};
pub use options::{
    BooleanOptions, Fallback, NumberArrayOptions, NumberConstraint, NumberOptions,
    StringArrayOptions, StringOptions,
};
