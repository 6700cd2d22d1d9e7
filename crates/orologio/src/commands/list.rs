use orologio_core::clock;
use orologio_core::config;
use orologio_core::tick::{SystemTimeSource, TimeSource};

/// Prints one line per configured clock and exits.
pub fn execute() {
    let store = super::require_store();
    let config = config::load(&store);
    let now = SystemTimeSource.now();

    for clock in clock::refresh_clocks(now, &config.clocks) {
        println!("{:<16} {}  {}", clock.name, clock.time, clock.date);
    }
}
