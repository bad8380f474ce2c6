//! Environment adapters
//!
//! | Adapter | Backing | Use |
//! |---------|---------|-----|
//! | [`SystemEnv`] | `std::env` | production |
//! | [`InMemoryEnv`] | `RwLock<HashMap>` | tests, embedded hosts |

mod in_memory;
mod system;

pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;
