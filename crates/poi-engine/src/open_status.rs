//! Open/closed evaluation at a point in time.

use poi_schedule::{DayHours, DayStatus, ScheduleDocument};
use poi_time::{ClockTime, LocalDateTime};
use serde::Serialize;

use crate::config::ResolverOptions;
use crate::resolver::{EffectiveResult, Resolver, Source};

/// Whether a venue is open, with a one-line status for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStatus {
    /// Open right now.
    pub is_open: bool,
    /// e.g. `"Open until 5:00pm"`, `"Closed - Christmas Day"`.
    pub status: String,
    /// Layer the day's hours came from.
    pub source: Source,
    /// Label of that layer, if any.
    pub label: Option<String>,
}

/// Whether the venue described by `document` is open at `now`.
///
/// `now` is local wall-clock time; the caller supplies it.
pub fn is_open_now(document: &ScheduleDocument, now: LocalDateTime) -> OpenStatus {
    Resolver::new(document).open_status(now)
}

/// Evaluate an already-resolved day at `time`.
pub fn evaluate_open_status(
    result: &EffectiveResult,
    time: ClockTime,
    options: &ResolverOptions,
) -> OpenStatus {
    let (is_open, status) = match &result.hours {
        None => (false, options.hours_not_set_text.clone()),
        Some(hours) => day_status_at(hours, time, result.label.as_deref(), options),
    };
    tracing::trace!(%time, is_open, status = %status, source = %result.source, "open status");
    OpenStatus {
        is_open,
        status,
        source: result.source,
        label: result.label.clone(),
    }
}

fn day_status_at(
    hours: &DayHours,
    time: ClockTime,
    label: Option<&str>,
    options: &ResolverOptions,
) -> (bool, String) {
    match hours.status {
        DayStatus::Closed => match label {
            Some(label) => (false, format!("Closed - {label}")),
            None => (false, "Closed".to_string()),
        },
        DayStatus::TwentyFourHours => (true, "Open 24 Hours".to_string()),
        DayStatus::Appointment => (false, "By Appointment Only".to_string()),
        DayStatus::Open if hours.periods.is_empty() => {
            (false, options.hours_not_set_text.clone())
        }
        DayStatus::Open => open_periods_at(hours, time),
    }
}

fn open_periods_at(hours: &DayHours, time: ClockTime) -> (bool, String) {
    let mut fixed = hours.periods.iter().filter_map(|p| p.fixed_bounds()).peekable();
    let first_open = fixed.peek().map(|(open, _)| *open);

    for (open, close) in fixed {
        if contains(open, close, time) {
            return (true, format!("Open until {}", close.to_12h()));
        }
    }
    match first_open {
        Some(open) if time < open => (false, format!("Opens at {}", open.to_12h())),
        _ => (false, "Closed".to_string()),
    }
}

/// Half-open `[open, close)`; a period with `close < open` runs past midnight.
fn contains(open: ClockTime, close: ClockTime, time: ClockTime) -> bool {
    if close < open {
        time >= open || time < close
    } else {
        open <= time && time < close
    }
}
