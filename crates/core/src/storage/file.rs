use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// Key-value medium persisted as a single JSON object in a file on disk.
///
/// The whole map is held in memory and the file is rewritten on every
/// `set`/`remove`. A missing file opens as an empty store; an unreadable or
/// corrupt file also opens empty (and is overwritten by the next write).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store backed by `path`. Never fails; see the type docs.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt store file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Cannot read store file {:?}: {}", path, e);
                BTreeMap::new()
            }
        };
        debug!("Opened file store {:?} with {} keys", path, values.len());
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(&self.values).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize store file: {e}"))
        })?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        let Some(previous) = self.values.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.values.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
