//! Per-timezone time and date formatting.
//!
//! Everything here is a pure function of `(now, timezone)`. The instant
//! comes in as a [`DateTime<FixedOffset>`] so it carries the viewer's
//! own UTC offset — the date string's offset marker is relative to that,
//! and both sides are evaluated at `now`, so it stays DST-aware.

use chrono::{DateTime, FixedOffset, Offset};
use chrono_tz::Tz;

use crate::config::ClockEntry;
use crate::error::Error;

/// Display-ready strings for one clock, recomputed every tick and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedClock {
    pub name: String,
    pub time: String,
    pub date: String,
}

/// Shown in place of the time when an entry's timezone can't be
/// resolved, so one bad entry doesn't take down the rest of the wall.
const PLACEHOLDER_TIME: &str = "--:--:--";

fn zone(timezone: &str) -> Result<Tz, Error> {
    timezone
        .parse()
        .map_err(|_| Error::UnknownTimezone(timezone.to_string()))
}

/// Wall-clock time in the target timezone, 24-hour `HH:MM:SS`.
pub fn format_time(now: DateTime<FixedOffset>, timezone: &str) -> Result<String, Error> {
    let offset_now = now.with_timezone(&zone(timezone)?);
    Ok(offset_now.format("%H:%M:%S").to_string())
}

/// Date in the target timezone: short weekday, short date, and the
/// offset marker relative to the viewer's own zone, e.g.
/// `Wed 12/22/99 J+9`.
///
/// The marker counts whole hours: target offset minus viewer offset, in
/// minutes, divided by 60 with truncation toward zero. Zones at 30- or
/// 45-minute offsets lose the fraction — the marker is advisory, not
/// exact. Non-negative offsets get a leading `+`, including `J+0` when
/// the offsets match.
pub fn format_date(now: DateTime<FixedOffset>, timezone: &str) -> Result<String, Error> {
    let offset_now = now.with_timezone(&zone(timezone)?);
    let target_minutes = offset_now.offset().fix().local_minus_utc() / 60;
    let viewer_minutes = now.offset().local_minus_utc() / 60;
    let ref_offset = (target_minutes - viewer_minutes) / 60;
    let marker = if ref_offset < 0 {
        format!("J{ref_offset}")
    } else {
        format!("J+{ref_offset}")
    };
    Ok(format!(
        "{} {} {}",
        offset_now.format("%a"),
        offset_now.format("%-m/%-d/%y"),
        marker
    ))
}

/// Time and date for one timezone at one instant.
pub fn format_clock(
    now: DateTime<FixedOffset>,
    timezone: &str,
) -> Result<(String, String), Error> {
    Ok((format_time(now, timezone)?, format_date(now, timezone)?))
}

/// Formats every entry for one tick, in configuration order.
///
/// Entries whose timezone can't be resolved render as placeholders with
/// a logged warning instead of aborting the remaining clocks.
pub fn refresh_clocks(now: DateTime<FixedOffset>, clocks: &[ClockEntry]) -> Vec<FormattedClock> {
    clocks
        .iter()
        .map(|entry| match format_clock(now, &entry.timezone) {
            Ok((time, date)) => FormattedClock {
                name: entry.name.clone(),
                time,
                date,
            },
            Err(e) => {
                crate::log_warn!("clock '{}': {e}", entry.name);
                FormattedClock {
                    name: entry.name.clone(),
                    time: PLACEHOLDER_TIME.into(),
                    date: String::new(),
                }
            }
        })
        .collect()
}
