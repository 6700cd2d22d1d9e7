use orologio_core::ClockConfig;
use orologio_core::config::{self, ConfigStore};

/// Creates the default configuration file at
/// `~/.config/orologio/clock_config.json`.
///
/// An existing file is not overwritten.
pub fn execute() {
    let store = super::require_store();
    let path = store.path(config::CONFIG_KEY);

    if store.get(config::CONFIG_KEY).is_some() {
        println!("Already exists: {}", path.display());
        return;
    }

    match config::save(&store, &ClockConfig::default()) {
        Ok(()) => {
            println!("Created {}", path.display());
            println!("\nEdit this file to pick a layout (\"4\" or \"8\") and your timezones.");
            println!("Timezones are IANA identifiers, e.g. \"America/New_York\".");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
