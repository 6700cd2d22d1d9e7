use std::io::{self, Write};

use orologio_core::layout::LayoutTable;
use orologio_core::log::{self, LogConfig};
use orologio_core::tick::{self, SystemTimeSource};
use orologio_core::{clock, config, layout};

use crate::render;

/// Runs the live wall-clock display until interrupted.
///
/// Configuration is loaded once and the grid built once; each tick only
/// re-formats the clocks and repaints the frame. Editing the config
/// file takes effect on the next start.
pub fn execute(enable_log: bool) {
    let store = super::require_store();

    if enable_log {
        log::init(&LogConfig {
            enabled: true,
            ..LogConfig::default()
        });
    }

    let config = config::load(&store);
    let table = LayoutTable::builtin();
    let grid = match layout::build_grid(&config, &table) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    orologio_core::log_info!(
        "starting wall display: layout {}, {} clocks",
        config.layout,
        config.clocks.len()
    );

    tick::run(&SystemTimeSource, tick::REFRESH_PERIOD, |now| {
        let clocks = clock::refresh_clocks(now, &config.clocks);
        let frame = render::render_grid(&grid, &clocks);
        print!("\x1b[2J\x1b[H{frame}");
        let _ = io::stdout().flush();
        true
    });
}
