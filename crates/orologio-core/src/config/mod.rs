mod loader;
mod store;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutKey;

pub use loader::{config_dir, config_path, default_store, delete, load, save, try_load};
pub use store::{CONFIG_KEY, ConfigStore, FileStore};

/// Top-level configuration for the clock wall.
///
/// Persisted as a single JSON document under [`CONFIG_KEY`]; replaced
/// wholesale on save, never patched in place. The layout engine and the
/// per-tick refresh both read the same loaded snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Which built-in layout preset to render.
    pub layout: LayoutKey,
    /// Clocks in display order. Entries have no stable identity beyond
    /// their position.
    pub clocks: Vec<ClockEntry>,
}

/// One clock on the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEntry {
    /// IANA timezone identifier (e.g. "America/New_York"). Not
    /// validated at load time; resolution failures surface per tick.
    pub timezone: String,
    /// Label shown above the time.
    pub name: String,
}

impl ClockEntry {
    pub fn new(timezone: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            name: name.into(),
        }
    }
}

/// Eight world cities on the "8" preset — what you get before saving
/// anything, and what a deleted or malformed document falls back to.
impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKey::Eight,
            clocks: vec![
                ClockEntry::new("GMT", "GMT"),
                ClockEntry::new("America/New_York", "New York"),
                ClockEntry::new("America/Los_Angeles", "Los Angeles"),
                ClockEntry::new("America/Denver", "Denver"),
                ClockEntry::new("America/Chicago", "Chicago"),
                ClockEntry::new("Europe/Paris", "Paris"),
                ClockEntry::new("Asia/Dubai", "Dubai"),
                ClockEntry::new("Asia/Singapore", "Singapore"),
            ],
        }
    }
}
