use orologio_core::ClockConfig;
use orologio_core::config::{self, ConfigStore};

/// Prints the active (loaded) configuration as pretty JSON.
pub fn show() {
    let store = super::require_store();
    let config = config::load(&store);
    print_json(&config);
}

/// Prints the compiled-in default configuration.
pub fn default() {
    print_json(&ClockConfig::default());
}

/// Prints the path of the backing configuration file.
pub fn path() {
    let store = super::require_store();
    println!("{}", store.path(config::CONFIG_KEY).display());
}

/// Deletes the stored configuration; the next run uses the default.
pub fn reset() {
    let store = super::require_store();
    let had_one = store.get(config::CONFIG_KEY).is_some();

    if let Err(e) = config::delete(&store) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if had_one {
        println!("Stored configuration deleted.");
    } else {
        println!("No stored configuration.");
    }
}

fn print_json(config: &ClockConfig) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
