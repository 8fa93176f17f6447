//! Wall-clock time of day and local date-times.
//!
//! Opening hours are compared at minute granularity in local time; there is
//! no time zone anywhere in the workspace.

use std::fmt;
use std::str::FromStr;

use poi_core::errors::{Error, Result};
use poi_core::utilities::data_formatters::format_clock_12h;
use poi_core::utilities::data_parsers::parse_clock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;

/// A time of day between 00:00 and 23:59.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Create a time from hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::Date(format!(
                "clock time {hour:02}:{minute:02} out of range"
            )));
        }
        Ok(ClockTime(hour as u16 * 60 + minute as u16))
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// Lowercase 12-hour rendering (`"9:00am"`).
    pub fn to_12h(&self) -> String {
        format_clock_12h(self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    /// Parse a 24-hour `HH:MM` string.
    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = parse_clock(s).ok_or_else(|| Error::parse("clock time", s))?;
        ClockTime::new(h, m).map_err(|_| Error::parse("clock time", s))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A local calendar date plus a wall-clock time.
///
/// This is the "now" every caller passes in; nothing in the workspace reads a
/// system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: Date,
    time: ClockTime,
}

impl LocalDateTime {
    /// Combine a date and a time.
    pub fn new(date: Date, time: ClockTime) -> Self {
        LocalDateTime { date, time }
    }

    /// Return the calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the time of day.
    pub fn time(&self) -> ClockTime {
        self.time
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    /// Parse `YYYY-MM-DDTHH:MM` (a space may replace the `T`; trailing
    /// seconds are accepted and dropped).
    ///
    /// A trailing `Z` or `±HH:MM` offset is accepted and ignored: the wall
    /// clock reading as written is taken as local time, not converted.
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let (d, rest) = t
            .split_once(['T', ' '])
            .ok_or_else(|| Error::parse("local date-time", s))?;
        let rest = rest.trim_end_matches(['Z', 'z']);
        let rest = match rest.find(['+', '-']) {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        let hm = match rest.match_indices(':').nth(1) {
            Some((idx, _)) => &rest[..idx],
            None => rest,
        };
        Ok(LocalDateTime::new(d.parse()?, hm.parse()?))
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}
