pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod log;
pub mod tick;

pub use clock::FormattedClock;
pub use config::{ClockConfig, ClockEntry};
pub use error::Error;
pub use layout::{CellSize, LayoutKey, LayoutTable, RenderedGrid, build_grid};
