//! Fixed-period refresh scheduling.
//!
//! The per-tick work (formatting every clock) is pure computation, so
//! the scheduler only needs to hand it the current instant on a fixed
//! period. "Now" comes from a [`TimeSource`] so tests can drive ticks
//! with a fake instant and a zero period instead of real delays.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};

/// How often the wall display refreshes.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(250);

/// Source of "now", carrying the viewer's local UTC offset.
pub trait TimeSource {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock with the system's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Invokes `tick` with the current instant once per `period` until it
/// returns `false`.
///
/// Runs on the caller's thread and sleeps between ticks. Each tick only
/// reads its inputs and produces output, so there is nothing re-entrant
/// to guard against.
pub fn run(
    source: &impl TimeSource,
    period: Duration,
    mut tick: impl FnMut(DateTime<FixedOffset>) -> bool,
) {
    while tick(source.now()) {
        std::thread::sleep(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Always reports the same instant.
    struct FixedSource(DateTime<FixedOffset>);

    impl TimeSource for FixedSource {
        fn now(&self) -> DateTime<FixedOffset> {
            self.0
        }
    }

    #[test]
    fn runs_until_the_tick_declines_to_continue() {
        // Arrange
        let instant = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
            .unwrap();
        let source = FixedSource(instant);
        let mut seen = Vec::new();

        // Act — three ticks, then stop
        run(&source, Duration::ZERO, |now| {
            seen.push(now);
            seen.len() < 3
        });

        // Assert
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|now| *now == instant));
    }

    #[test]
    fn system_source_attaches_a_local_offset() {
        // Arrange / Act
        let now = SystemTimeSource.now();

        // Assert — offset is within the real-world range of UTC±14h
        let offset = now.offset().local_minus_utc();
        assert!(offset.abs() <= 14 * 3600);
    }
}
