//! Priority chain behaviour on realistic documents.

use poi_engine::{resolve, Resolver, ResolverOptions, Source};
use poi_schedule::{DayHours, Period, ScheduleDocument};
use poi_time::Date;
use serde_json::json;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn hours(open: &str, close: &str) -> Option<DayHours> {
    Some(DayHours::open(vec![Period::fixed(open, close).unwrap()]))
}

/// Every layer claims Wednesday 2024-12-25.
fn layered() -> serde_json::Value {
    json!({
        "regular": {
            "monday":    {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]},
            "wednesday": {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]}
        },
        "seasonal": {
            "winter": {
                "useDateRange": true, "startDate": "12-01", "endDate": "02-28",
                "regular": {"wednesday": {"status": "open", "periods": [{"open": "10:00", "close": "14:00"}]}}
            }
        },
        "holidays": {"christmas": {"status": "closed"}},
        "exceptions": [
            {"date": "2024-12-25", "status": "modified", "reason": "Burst pipe",
             "periods": [{"open": "12:00", "close": "13:00"}]}
        ]
    })
}

#[test]
fn layers_peel_in_priority_order() {
    let day = date(2024, 12, 25);
    let mut value = layered();

    let doc = ScheduleDocument::from_value(value.clone()).unwrap();
    let r = resolve(day, &doc);
    assert_eq!(r.source, Source::Exception);
    assert_eq!(r.hours, hours("12:00", "13:00"));
    assert_eq!(r.label.as_deref(), Some("Burst pipe"));

    value.as_object_mut().unwrap().remove("exceptions");
    let doc = ScheduleDocument::from_value(value.clone()).unwrap();
    let r = resolve(day, &doc);
    assert_eq!(r.source, Source::Holiday);
    assert_eq!(r.hours, Some(DayHours::closed()));
    assert_eq!(r.label.as_deref(), Some("Christmas Day"));

    value.as_object_mut().unwrap().remove("holidays");
    let doc = ScheduleDocument::from_value(value.clone()).unwrap();
    let r = resolve(day, &doc);
    assert_eq!(r.source, Source::Seasonal);
    assert_eq!(r.hours, hours("10:00", "14:00"));
    assert_eq!(r.label.as_deref(), Some("Winter Hours"));

    value.as_object_mut().unwrap().remove("seasonal");
    let doc = ScheduleDocument::from_value(value.clone()).unwrap();
    let r = resolve(day, &doc);
    assert_eq!(r.source, Source::Regular);
    assert_eq!(r.hours, hours("09:00", "17:00"));
    assert_eq!(r.label, None);

    value.as_object_mut().unwrap().remove("regular");
    let doc = ScheduleDocument::from_value(value).unwrap();
    let r = resolve(day, &doc);
    assert_eq!(r.source, Source::None);
    assert_eq!(r.hours, None);
}

#[test]
fn open_exception_uses_regular_hours_only() {
    let mut value = layered();
    value["exceptions"] = json!([{"date": "2024-12-25", "status": "open", "reason": "Open for Christmas"}]);
    let doc = ScheduleDocument::from_value(value).unwrap();
    let r = resolve(date(2024, 12, 25), &doc);
    assert_eq!(r.source, Source::Exception);
    assert_eq!(r.label.as_deref(), Some("Open for Christmas"));
    // Neither the holiday closure nor the winter table applies.
    assert_eq!(r.hours, hours("09:00", "17:00"));
}

#[test]
fn recurring_last_monday_in_five_monday_month() {
    let doc = ScheduleDocument::from_value(json!({
        "regular": {"monday": {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]}},
        "exceptions": [{
            "type": "recurring",
            "pattern": {"ordinal": "last", "dayOfWeek": "monday"},
            "status": "closed"
        }]
    }))
    .unwrap();
    // January 2024 has five Mondays.
    for d in [1, 8, 15, 22] {
        assert_eq!(resolve(date(2024, 1, d), &doc).source, Source::Regular, "Jan {d}");
    }
    let last = resolve(date(2024, 1, 29), &doc);
    assert_eq!(last.source, Source::Exception);
    assert_eq!(last.hours, Some(DayHours::closed()));
    assert_eq!(last.label.as_deref(), Some("Modified Schedule"));
}

#[test]
fn recurring_exception_respects_months() {
    let doc = ScheduleDocument::from_value(json!({
        "exceptions": [{
            "type": "recurring",
            "pattern": {"ordinal": "first", "dayOfWeek": "saturday", "months": ["6", "7", "8"]},
            "status": "closed",
            "reason": "Summer maintenance"
        }]
    }))
    .unwrap();
    assert_eq!(resolve(date(2024, 6, 1), &doc).source, Source::Exception);
    assert_eq!(resolve(date(2024, 9, 7), &doc).source, Source::None);
}

#[test]
fn season_window_wraps_year_end() {
    let doc = ScheduleDocument::from_value(json!({
        "seasonal": {
            "winter": {
                "useDateRange": true, "startDate": "12-01", "endDate": "02-28",
                "regular": {
                    "sunday": {"status": "closed"},
                    "saturday": {"status": "closed"},
                    "monday": {"status": "closed"}
                }
            }
        }
    }))
    .unwrap();
    assert_eq!(resolve(date(2024, 12, 15), &doc).source, Source::Seasonal); // Sunday
    assert_eq!(resolve(date(2024, 2, 10), &doc).source, Source::Seasonal); // Saturday
    assert_eq!(resolve(date(2024, 7, 1), &doc).source, Source::None); // Monday
}

#[test]
fn custom_holiday_and_modified_hours() {
    let doc = ScheduleDocument::from_value(json!({
        "holidays": {
            "founders_day": {"status": "closed", "date": "05-17", "name": "Founders' Day"},
            "black_friday": {"status": "modified", "periods": [{"open": "06:00", "close": "22:00"}]},
            "thanksgiving": {"status": "modified"}
        }
    }))
    .unwrap();
    let r = resolve(date(2024, 5, 17), &doc);
    assert_eq!(r.label.as_deref(), Some("Founders' Day"));
    let r = resolve(date(2024, 11, 29), &doc);
    assert_eq!(r.source, Source::Holiday);
    assert_eq!(r.hours, hours("06:00", "22:00"));
    // `modified` with no periods does not override.
    assert_eq!(resolve(date(2024, 11, 28), &doc).source, Source::None);
}

#[test]
fn options_change_labels() {
    let doc = ScheduleDocument::from_value(json!({
        "seasonal": {"summer": {"regular": {"thursday": {"status": "24hours"}}}},
        "exceptions": [{"date": "2024-07-05", "status": "closed"}]
    }))
    .unwrap();
    let options: ResolverOptions = serde_json::from_value(json!({
        "oneTimeExceptionLabel": "Closed Today",
        "seasonLabelSuffix": " Schedule"
    }))
    .unwrap();
    let resolver = Resolver::with_options(&doc, options);
    assert_eq!(
        resolver.resolve(date(2024, 7, 4)).label.as_deref(),
        Some("Summer Schedule")
    );
    assert_eq!(
        resolver.resolve(date(2024, 7, 5)).label.as_deref(),
        Some("Closed Today")
    );
}
