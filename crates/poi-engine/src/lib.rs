//! # poi-engine
//!
//! Resolves a [`ScheduleDocument`](poi_schedule::ScheduleDocument) into the
//! hours that actually apply on a date, and answers "is it open now?".
//!
//! Resolution is a fixed priority chain: exception, holiday, seasonal, then
//! regular hours. Every entry point takes the reference date or date-time as
//! an argument; nothing here reads a clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ResolverOptions`: fallback labels.
pub mod config;

/// Exception matching.
pub mod exception;

/// Display formatting and weekly grouping.
pub mod format;

/// Holiday registry and date calculator.
pub mod holiday;

/// Open/closed evaluation.
pub mod open_status;

/// The layer priority resolver.
pub mod resolver;

/// Active-season lookup.
pub mod season;

/// Seven-day projection.
pub mod week;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::ResolverOptions;
pub use exception::{match_exception, matches_recurring};
pub use format::{
    format_day_hours, format_day_hours_with, format_effective, format_effective_with,
    format_period, format_time_spec, group_regular_hours, group_regular_hours_with, HoursGroup,
};
pub use holiday::{
    compute_holiday_date, holiday_date, holiday_display_name, next_occurrence, upcoming_holidays,
    HolidayEntry, HolidayRegistry, HolidayRule, UpcomingHoliday,
};
pub use open_status::{evaluate_open_status, is_open_now, OpenStatus};
pub use resolver::{resolve, EffectiveResult, Layer, LayerOutcome, ResolveContext, Resolver, Source};
pub use season::active_season;
pub use week::{week_hours, DayProjection};
