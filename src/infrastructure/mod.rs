//! Infrastructure layer module
//!
//! - Environment adapters (process environment, in-memory table)
//! - Settings management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod env;
pub mod logging;
