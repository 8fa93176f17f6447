//! Week projection and recurring-pattern properties.

use poi_engine::{matches_recurring, week_hours, Resolver, Source};
use poi_schedule::{Ordinal, RecurringPattern, ScheduleDocument};
use poi_time::{Date, Weekday};
use proptest::prelude::*;
use serde_json::json;

fn document() -> ScheduleDocument {
    ScheduleDocument::from_value(json!({
        "regular": {
            "monday": {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]},
            "tuesday": {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]},
            "saturday": {"status": "closed"}
        },
        "seasonal": {"summer": {"regular": {"saturday": {"status": "open", "periods": [{"open": "10:00", "close": "16:00"}]}}}},
        "holidays": {"labor_day": {"status": "closed"}, "founders_day": {"status": "closed", "date": "03-14"}},
        "exceptions": [{"type": "recurring", "pattern": {"ordinal": "second", "dayOfWeek": "tuesday"}, "status": "closed"}]
    }))
    .unwrap()
}

#[test]
fn labor_day_week() {
    let doc = document();
    let start = Date::from_ymd(2024, 9, 1).unwrap(); // Sunday
    let week = week_hours(&doc, start, start);
    let sources: Vec<Source> = week.iter().map(|d| d.result.source).collect();
    assert_eq!(
        sources,
        [
            Source::None,
            Source::Holiday,
            Source::Regular,
            Source::None,
            Source::None,
            Source::None,
            Source::Regular,
        ]
    );
    assert!(week[0].is_today);
    assert!(week[1].is_modified);
    assert!(!week[2].is_modified);
}

fn ordinal() -> impl Strategy<Value = Ordinal> {
    prop_oneof![
        Just(Ordinal::First),
        Just(Ordinal::Second),
        Just(Ordinal::Third),
        Just(Ordinal::Fourth),
        Just(Ordinal::Last),
    ]
}

proptest! {
    #[test]
    fn week_projection_is_idempotent(serial in 0i32..50_000, offset in 0i32..7) {
        let doc = document();
        let start = Date::from_serial(serial).unwrap();
        let today = start.add_days(offset).unwrap();
        let first = week_hours(&doc, start, today);
        let second = Resolver::new(&doc).week(start, today);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 7);
        prop_assert_eq!(first.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn each_ordinal_matches_once_per_month(
        year in 1900u16..2200,
        month in 1u8..=12,
        wd in 1u8..=7,
        ord in ordinal(),
    ) {
        let weekday = Weekday::from_ordinal(wd).unwrap();
        let pattern = RecurringPattern::every_month(ord, weekday);
        let first = Date::from_ymd(year, month, 1).unwrap();
        let hits = (0..i32::from(first.days_in_month()))
            .map(|i| first.add_days(i).unwrap())
            .filter(|d| matches_recurring(*d, &pattern))
            .count();
        prop_assert_eq!(hits, 1);
    }
}
