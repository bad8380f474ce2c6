//! Port trait definitions (Hexagonal Architecture)
//!
//! - `ReadEnv`: lookup of a single environment variable
//!
//! Infrastructure adapters implement these so the accessors stay independent
//! of the process environment.

pub mod read_env;

pub use read_env::ReadEnv;
