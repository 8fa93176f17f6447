//! `MonthDay`: a yearless `MM-DD` calendar position.
//!
//! Seasonal ranges and custom holidays are written without a year. Ordering
//! is lexicographic on (month, day), which is what range membership needs;
//! `02-29` is accepted and simply never occurs in a common year.

use std::fmt;
use std::str::FromStr;

use poi_core::errors::{Error, Result};
use poi_core::utilities::data_parsers::parse_month_day;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{days_in_month, Date};
use crate::month::Month;

/// A month and day-of-month without a year.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Create a month/day. February accepts day 29.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        // 2000 is a leap year, so this is the largest day the month can have.
        let max = days_in_month(2000, month.number());
        if day == 0 || day > max {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {max}] for {month}"
            )));
        }
        Ok(MonthDay { month, day })
    }

    /// The month/day of a full date.
    pub fn of(date: Date) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day_of_month(),
        }
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Place this month/day in `year`.
    ///
    /// Fails for `02-29` in a common year.
    pub fn in_year(&self, year: u16) -> Result<Date> {
        Date::from_ymd(year, self.month.number(), self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (m, d) = parse_month_day(s).ok_or_else(|| Error::parse("month-day", s))?;
        let month = Month::from_number(m).ok_or_else(|| Error::parse("month-day", s))?;
        MonthDay::new(month, d)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number(), self.day)
    }
}

impl fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthDay({self})")
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
