//! Key-value persistence for configuration documents.

use std::fs;
use std::path::PathBuf;

/// Store key under which the clock configuration document lives.
pub const CONFIG_KEY: &str = "clock_config";

/// A key-value store holding serialized configuration documents.
///
/// Abstracted so the file-backed store and an in-memory test store are
/// interchangeable; the loader only ever sees these three operations.
pub trait ConfigStore {
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), String>;
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Removes the value under `key`. Removing an absent key is fine.
    fn delete(&self, key: &str) -> Result<(), String>;
}

/// File-backed store: one `<key>.json` file per key inside a root
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl ConfigStore for FileStore {
    fn put(&self, key: &str, value: &str) -> Result<(), String> {
        fs::create_dir_all(&self.root).map_err(|e| format!("{}: {e}", self.root.display()))?;
        let path = self.path(key);
        fs::write(&path, value).map_err(|e| format!("{}: {e}", path.display()))
    }

    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|e| format!("{}: {e}", path.display()))
    }
}
