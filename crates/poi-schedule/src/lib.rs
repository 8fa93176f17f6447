//! # poi-schedule
//!
//! The schedule document model: regular weekly hours, seasonal tables,
//! holidays, and one-time/recurring exceptions, with `serde` support for the
//! stored JSON shape.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ScheduleDocument`: the root document.
pub mod document;

/// One-time and recurring exceptions.
pub mod exception;

/// Holiday entries and `OverrideStatus`.
pub mod holiday;

/// Day-level hours, periods, and time endpoints.
pub mod hours;

/// Seasonal schedules.
pub mod season;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use document::ScheduleDocument;
pub use exception::{Exception, ExceptionRule, Ordinal, RecurringPattern};
pub use holiday::{HolidaySpec, OverrideStatus};
pub use hours::{DayHours, DayStatus, Period, TimeSpec, WeeklyHours};
pub use season::SeasonSpec;
