//! # poi-time
//!
//! Calendar primitives for opening-hours resolution: dates, weekdays,
//! months, yearless month/day pairs, wall-clock times, and the Easter
//! computus that movable holidays are derived from.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ClockTime` and `LocalDateTime`.
pub mod clock;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// `MonthDay`: yearless `MM-DD` position.
pub mod month_day;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{ClockTime, LocalDateTime};
pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use month_day::MonthDay;
pub use weekday::Weekday;
