//! Display text for hours and compact weekly summaries.

use poi_schedule::{DayHours, DayStatus, Period, TimeSpec, WeeklyHours};
use poi_time::Weekday;
use serde::Serialize;

use crate::config::ResolverOptions;
use crate::resolver::{EffectiveResult, Source};

/// `"9:00am"`, or the name of a non-fixed endpoint.
pub fn format_time_spec(spec: &TimeSpec) -> String {
    match spec {
        TimeSpec::Fixed(t) => t.to_12h(),
        TimeSpec::Dawn => "Dawn".to_string(),
        TimeSpec::Dusk => "Dusk".to_string(),
        TimeSpec::Appointment => "By Appointment".to_string(),
        TimeSpec::Call => "Call".to_string(),
    }
}

/// `"9:00am - 5:00pm"`.
pub fn format_period(period: &Period) -> String {
    format!(
        "{} - {}",
        format_time_spec(&period.open),
        format_time_spec(&period.close)
    )
}

/// One line of text for a day's hours.
///
/// # Example
/// ```
/// use poi_engine::format_day_hours;
/// use poi_schedule::{DayHours, Period};
///
/// let split = DayHours::open(vec![
///     Period::fixed("08:00", "12:00").unwrap(),
///     Period::fixed("13:30", "17:00").unwrap(),
/// ]);
/// assert_eq!(format_day_hours(Some(&split)), "8:00am - 12:00pm, 1:30pm - 5:00pm");
/// assert_eq!(format_day_hours(None), "Hours not set");
/// ```
pub fn format_day_hours(hours: Option<&DayHours>) -> String {
    format_day_hours_with(hours, &ResolverOptions::default())
}

/// [`format_day_hours`] using the "not set" text from `options`.
pub fn format_day_hours_with(hours: Option<&DayHours>, options: &ResolverOptions) -> String {
    let Some(hours) = hours else {
        return options.hours_not_set_text.clone();
    };
    match hours.status {
        DayStatus::Closed => "Closed".to_string(),
        DayStatus::TwentyFourHours => "Open 24 Hours".to_string(),
        DayStatus::Appointment => "By Appointment Only".to_string(),
        DayStatus::Open if hours.periods.is_empty() => options.hours_not_set_text.clone(),
        DayStatus::Open => hours
            .periods
            .iter()
            .map(format_period)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Formatted hours, with the label in parentheses when the day is overridden.
pub fn format_effective(result: &EffectiveResult) -> String {
    format_effective_with(result, &ResolverOptions::default())
}

/// [`format_effective`] using the "not set" text from `options`.
pub fn format_effective_with(result: &EffectiveResult, options: &ResolverOptions) -> String {
    let text = format_day_hours_with(result.hours.as_ref(), options);
    match (&result.label, result.source) {
        (_, Source::Regular | Source::None) | (None, _) => text,
        (Some(label), _) => format!("{text} ({label})"),
    }
}

/// A run of consecutive weekdays sharing the same hours text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursGroup {
    /// `"Mon - Fri"`, `"Sat"`, or `"Every day"`.
    pub label: String,
    /// Shared hours text.
    pub hours: String,
    /// The days in the run, Monday first.
    pub days: Vec<Weekday>,
}

/// Collapse a weekly table into runs of identical hours, Monday to Sunday.
///
/// Days missing from the table are grouped under the "not set" text.
pub fn group_regular_hours(regular: &WeeklyHours) -> Vec<HoursGroup> {
    group_regular_hours_with(regular, &ResolverOptions::default())
}

/// [`group_regular_hours`] using the "not set" text from `options`.
pub fn group_regular_hours_with(regular: &WeeklyHours, options: &ResolverOptions) -> Vec<HoursGroup> {
    let mut runs: Vec<(String, Vec<Weekday>)> = Vec::new();
    for day in Weekday::ALL {
        let text = format_day_hours_with(regular.get(day), options);
        match runs.last_mut() {
            Some((hours, days)) if *hours == text => days.push(day),
            _ => runs.push((text, vec![day])),
        }
    }
    runs.into_iter()
        .map(|(hours, days)| HoursGroup {
            label: range_label(&days),
            hours,
            days,
        })
        .collect()
}

fn range_label(days: &[Weekday]) -> String {
    match days {
        [] => String::new(),
        [only] => only.short_name().to_string(),
        all if all.len() == Weekday::ALL.len() => "Every day".to_string(),
        [first, .., last] => format!("{} - {}", first.short_name(), last.short_name()),
    }
}
