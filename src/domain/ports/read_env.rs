/// Key-by-key read access to an environment table.
///
/// Implementations never enumerate or mutate the table.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    /// Value stored under `key`, or `None` when it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for std::sync::Arc<E> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
