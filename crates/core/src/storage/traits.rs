use crate::errors::CoreError;

/// A synchronous string key-value medium (browser local storage, a JSON file,
/// an in-memory map).
///
/// Reads cannot fail: a medium that is unavailable simply has no keys.
/// Writes and removals report medium failures (quota exceeded, disk error)
/// so that `EntryStore::save` / `EntryStore::delete` can propagate them.
pub trait KeyValueStore {
    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Remove `key`. Removing a key that doesn't exist is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}
