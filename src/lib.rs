//! envtype - Typed Environment Variable Accessors
//!
//! Reads environment variables as booleans, numbers, strings and arrays of
//! numbers or strings, with allow-lists, inclusive numeric ranges and an
//! explicit fallback policy for variables that are not provided.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): error taxonomy, accessor options, the `ReadEnv` port
//! - **Service Layer** (`services`): coercion, validation and the accessors
//! - **Infrastructure Layer** (`infrastructure`): environment adapters, settings, logging
//!
//! # Example
//!
//! ```
//! use envtype::{EnvReader, InMemoryEnv, NumberOptions, StringArrayOptions};
//!
//! let env = InMemoryEnv::new();
//! env.set("PORT", "8080");
//! env.set("REGIONS", "eu,us");
//!
//! let reader = EnvReader::new(&env);
//! let port = reader.get_number("PORT", NumberOptions::new().allow_range(1.0, 65535.0))?;
//! let regions = reader.get_string_array(
//!     "REGIONS",
//!     StringArrayOptions::new().allow_list(["eu", "us", "ap"]),
//! )?;
//! let timeout = reader.get_number("TIMEOUT", NumberOptions::new().with_default(30.0))?;
//!
//! assert_eq!(port, Some(8080.0));
//! assert_eq!(regions, vec!["eu", "us"]);
//! assert_eq!(timeout, Some(30.0));
//! # Ok::<(), envtype::ConfigError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{AllowList, AllowRange, ConfigError, ConfigErrorKind, ConfigResult};
pub use domain::models::{
    BooleanOptions, Fallback, NumberArrayOptions, NumberConstraint, NumberOptions, ReaderConfig,
    Settings, StringArrayOptions, StringOptions,
};
pub use domain::ports::ReadEnv;
pub use infrastructure::config::{SettingsError, SettingsLoader};
pub use infrastructure::env::{InMemoryEnv, SystemEnv};
pub use services::{
    get_boolean, get_number, get_number_array, get_string, get_string_array, EnvReader,
};
