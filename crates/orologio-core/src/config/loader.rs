use std::path::PathBuf;

use super::ClockConfig;
use super::store::{CONFIG_KEY, ConfigStore, FileStore};

/// Returns the config directory: `~/.config/orologio/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("orologio"))
}

/// Returns the config file path: `~/.config/orologio/clock_config.json`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| FileStore::new(d).path(CONFIG_KEY))
}

/// Returns the file-backed store at the default location, or `None`
/// when the home directory can't be determined.
pub fn default_store() -> Option<FileStore> {
    config_dir().map(FileStore::new)
}

/// Tries to load and parse the stored document.
///
/// `Ok(None)` when nothing is stored; `Err` describes a document that
/// exists but doesn't parse.
pub fn try_load(store: &impl ConfigStore) -> Result<Option<ClockConfig>, String> {
    let Some(raw) = store.get(CONFIG_KEY) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("{CONFIG_KEY}: {e}"))
}

/// Loads the configuration, falling back to the compiled-in default.
///
/// An absent document silently returns the default; a malformed one
/// logs a warning and returns the default. Never an error to the
/// caller, so the refresh loop can't be taken down by a bad save.
pub fn load(store: &impl ConfigStore) -> ClockConfig {
    match try_load(store) {
        Ok(Some(config)) => config,
        Ok(None) => ClockConfig::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            crate::log_warn!("malformed clock config, using default: {e}");
            ClockConfig::default()
        }
    }
}

/// Serializes and stores the configuration, replacing the previous
/// document wholesale.
pub fn save(store: &impl ConfigStore, config: &ClockConfig) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(config).map_err(|e| e.to_string())?;
    store.put(CONFIG_KEY, &raw)
}

/// Removes the stored document; the next load reverts to the default.
pub fn delete(store: &impl ConfigStore) -> Result<(), String> {
    store.delete(CONFIG_KEY)
}
