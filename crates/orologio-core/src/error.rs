use thiserror::Error;

use crate::layout::LayoutKey;

/// Errors produced by the layout engine and the time formatter.
///
/// Both are pure functions over local data, so there are no transient
/// failure modes and nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The configured layout key has no entry in the layout table.
    #[error("unknown layout: {0}")]
    UnknownLayout(LayoutKey),
    /// The timezone string is not a recognized IANA identifier.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}
