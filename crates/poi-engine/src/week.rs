//! Seven-day projection.

use poi_schedule::ScheduleDocument;
use poi_time::{Date, Weekday};
use serde::Serialize;

use crate::resolver::{EffectiveResult, Resolver, Source};

/// One day of a projected week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProjection {
    /// The date.
    pub date: Date,
    /// Its weekday.
    pub weekday: Weekday,
    /// Effective hours on that date.
    pub result: EffectiveResult,
    /// `date` is the reference day.
    pub is_today: bool,
    /// Hours come from anything other than the regular table.
    pub is_modified: bool,
}

/// The seven days starting at `start`, resolved against `document`.
///
/// Fewer than seven entries are returned only when the week runs past the
/// last supported date.
pub fn week_hours(document: &ScheduleDocument, start: Date, today: Date) -> Vec<DayProjection> {
    Resolver::new(document).week(start, today)
}

pub(crate) fn project_week(resolver: &Resolver<'_>, start: Date, today: Date) -> Vec<DayProjection> {
    (0..7)
        .map_while(|offset| start.add_days(offset).ok())
        .map(|date| {
            let result = resolver.resolve(date);
            DayProjection {
                date,
                weekday: date.weekday(),
                is_today: date == today,
                is_modified: result.source != Source::Regular,
                result,
            }
        })
        .collect()
}
