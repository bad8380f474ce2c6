use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::ports::ReadEnv;

/// Won't touch the global process environment.
///
/// All methods take `&self`, so one instance can be shared between a test and
/// the reader under test.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn clear(&self) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}

impl ReadEnv for InMemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
