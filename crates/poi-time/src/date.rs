//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to the Unix epoch
//! (1970-01-01 = serial 0) and converted to and from the civil calendar with
//! Howard Hinnant's `days_from_civil` / `civil_from_days` algorithms. The
//! proleptic Gregorian calendar is used throughout.
//!
//! # Range
//! Valid dates run from 0001-01-01 to 9999-12-31. Constructors and
//! arithmetic return [`Error::Date`] outside that range.

use std::fmt;
use std::str::FromStr;

use poi_core::ensure;
use poi_core::errors::{Error, Result};
use poi_core::utilities::data_parsers::parse_iso_date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date without time-of-day or time zone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year as i32, month as i32, day as i32)))
    }

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        civil_from_days(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = civil_from_days(self.0).1;
        Month::from_number(m).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return `(year, month, day)` in one conversion.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        let (y, m, _) = civil_from_days(self.0);
        days_in_month(y, m)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow adding {n} days")))?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, d) = civil_from_days(self.0);
        Date(self.0 + (days_in_month(y, m) - d) as i32)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// The first occurrence is located, then `(n - 1) * 7` days are added.
    /// For example, `nth_weekday(4, Weekday::Thursday, 2024, 11)` is
    /// Thanksgiving 2024 (2024-11-28).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or the *n*-th occurrence would spill
    /// into the next month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7);
        let day = 1 + skip + 7 * (n as i32 - 1);
        if day > days_in_month(year, month) as i32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year:04}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in `year`/`month`.
    ///
    /// Starts from the last calendar day of the month and walks back to the
    /// nearest matching weekday.
    pub fn last_weekday(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let back = (last.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        Ok(Date(last.0 - back))
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s).ok_or_else(|| Error::parse("date", s))?;
        Date::from_ymd(y, m, d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year. Returns 0 for an invalid month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian civil date.
fn days_from_civil(year: i32, month: i32, day: i32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (month + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1970, 1, 1).serial(), 0);
        assert_eq!(date(1970, 1, 2).serial(), 1);
        assert_eq!(date(1969, 12, 31).serial(), -1);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(date(1, 1, 1), Date::MIN);
        assert_eq!(date(9999, 12, 31), Date::MAX);
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_components() {
        let d = date(2000, 2, 29);
        assert_eq!(d.ymd(), (2000, 2, 29));
        assert_eq!(d.month(), Month::February);
        assert_eq!(d.days_in_month(), 29);
        assert!(Date::from_ymd(2100, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2023, 12, 25).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_end_of_month() {
        let eom = date(2024, 2, 15).end_of_month();
        assert_eq!(eom, date(2024, 2, 29));
        assert!(eom.is_end_of_month());
        assert!(!date(2024, 2, 28).is_end_of_month());
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        assert_eq!(d.add_days(31).unwrap(), date(2023, 2, 1));
        assert_eq!(d.add_days(-1).unwrap(), date(2022, 12, 31));
        assert_eq!(d.days_between(date(2023, 2, 1)), 31);
    }

    #[test]
    fn test_nth_weekday() {
        let d = Date::nth_weekday(3, Weekday::Wednesday, 2024, 3).unwrap();
        assert_eq!(d, date(2024, 3, 20));
        assert_eq!(
            Date::nth_weekday(1, Weekday::Monday, 2024, 1).unwrap(),
            date(2024, 1, 1)
        );
        assert_eq!(
            Date::nth_weekday(5, Weekday::Monday, 2024, 1).unwrap(),
            date(2024, 1, 29)
        );
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(
            Date::last_weekday(Weekday::Monday, 2025, 5).unwrap(),
            date(2025, 5, 26)
        );
        // May 31, 2021 is itself a Monday.
        assert_eq!(
            Date::last_weekday(Weekday::Monday, 2021, 5).unwrap(),
            date(2021, 5, 31)
        );
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2024-12-25".parse().unwrap();
        assert_eq!(d, date(2024, 12, 25));
        assert_eq!(d.to_string(), "2024-12-25");
        assert_eq!(format!("{d:?}"), "Date(2024-12-25)");
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!("12/25/2024".parse::<Date>().is_err());
    }
}
