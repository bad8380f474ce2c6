pub mod accessors;
mod array;
pub mod coercion;
pub mod env_reader;
mod scalar;
pub mod validation;

pub use accessors::{get_boolean, get_number, get_number_array, get_string, get_string_array};
pub use env_reader::EnvReader;
