//! Timestamps for stop records.
//!
//! Stop records carry a `last_updated` stamp in the fixed format
//! `yyyy-mm-dd-hh:mm:ss` (local time, second precision).

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// `strftime` pattern for [`Timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// A second-precision local timestamp.
///
/// # Examples
///
/// ```
/// use stop_server::domain::Timestamp;
///
/// let ts = Timestamp::parse("2024-03-09-12:00:40").unwrap();
/// assert_eq!(ts.to_string(), "2024-03-09-12:00:40");
///
/// assert!(Timestamp::parse("2024-03-09 12:00:40").is_err());
/// assert!(Timestamp::parse("2024-13-09-12:00:40").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time, truncated to whole seconds.
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Wrap a naive datetime, dropping sub-second precision.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Parse a timestamp in `yyyy-mm-dd-hh:mm:ss` format.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Self)
    }

    /// The underlying datetime.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
