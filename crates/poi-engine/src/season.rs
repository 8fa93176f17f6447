//! Seasonal range resolver.

use std::collections::BTreeMap;

use poi_schedule::SeasonSpec;
use poi_time::{Date, Month, MonthDay};

/// The season active on `date`, with its spec.
///
/// Seasons with an explicit `useDateRange` window are checked first, in key
/// order; only if none of them match are the remaining seasons checked
/// against calendar-quarter months by name.
pub fn active_season<'a>(
    date: Date,
    seasonal: &'a BTreeMap<String, SeasonSpec>,
) -> Option<(&'a str, &'a SeasonSpec)> {
    let today = MonthDay::of(date);

    let ranged = seasonal.iter().find(|(_, spec)| {
        spec.date_range()
            .is_some_and(|(start, end)| in_window(today, start, end))
    });
    if let Some((name, spec)) = ranged {
        return Some((name.as_str(), spec));
    }

    seasonal
        .iter()
        .filter(|(_, spec)| spec.date_range().is_none())
        .find(|(name, _)| quarter_months(name).is_some_and(|months| months.contains(&date.month())))
        .map(|(name, spec)| (name.as_str(), spec))
}

/// Inclusive `[start, end]`; when `end < start` the window wraps over New
/// Year and is `[start, 12-31] ∪ [01-01, end]`.
pub fn in_window(day: MonthDay, start: MonthDay, end: MonthDay) -> bool {
    if end < start {
        day >= start || day <= end
    } else {
        start <= day && day <= end
    }
}

/// Calendar-quarter months for the well-known season names.
pub fn quarter_months(name: &str) -> Option<[Month; 3]> {
    match name.trim().to_ascii_lowercase().as_str() {
        "spring" => Some([Month::March, Month::April, Month::May]),
        "summer" => Some([Month::June, Month::July, Month::August]),
        "fall" | "autumn" => Some([Month::September, Month::October, Month::November]),
        "winter" => Some([Month::December, Month::January, Month::February]),
        _ => None,
    }
}
