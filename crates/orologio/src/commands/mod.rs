pub mod config;
pub mod init;
pub mod list;
pub mod start;

use orologio_core::config::FileStore;

/// Returns the default file-backed store, or exits with an error when
/// the home directory can't be determined.
pub fn require_store() -> FileStore {
    let Some(store) = orologio_core::config::default_store() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };
    store
}
