//! Exception matcher.

use poi_schedule::{Exception, ExceptionRule, RecurringPattern};
use poi_time::Date;

/// The first exception in document order that applies to `date`.
///
/// Overlapping exceptions are resolved by position, not specificity.
pub fn match_exception(date: Date, exceptions: &[Exception]) -> Option<&Exception> {
    exceptions.iter().find(|e| applies_on(e, date))
}

/// `true` if `exception` applies to `date`.
pub fn applies_on(exception: &Exception, date: Date) -> bool {
    match &exception.rule {
        ExceptionRule::OneTime(d) => *d == date,
        ExceptionRule::Recurring(pattern) => matches_recurring(date, pattern),
    }
}

/// `true` if `date` is an occurrence of `pattern`.
///
/// For [`Ordinal::Last`](poi_schedule::Ordinal::Last) the date must be the
/// final such weekday of its month (a week later is already next month);
/// otherwise `ceil(day / 7)` must equal the ordinal.
pub fn matches_recurring(date: Date, pattern: &RecurringPattern) -> bool {
    if date.weekday() != pattern.day_of_week {
        return false;
    }
    if !pattern.months.is_empty() && !pattern.months.contains(&date.month()) {
        return false;
    }
    let day = date.day_of_month();
    match pattern.ordinal.week_number() {
        None => day + 7 > date.days_in_month(),
        Some(n) => (day + 6) / 7 == n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poi_schedule::{Ordinal, OverrideStatus};
    use poi_time::{Month, Weekday};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn last_monday_in_five_monday_month() {
        // January 2024 starts on a Monday and has 31 days: Mondays 1, 8, 15, 22, 29.
        let p = RecurringPattern::every_month(Ordinal::Last, Weekday::Monday);
        assert!(matches_recurring(date(2024, 1, 29), &p));
        for d in [1, 8, 15, 22] {
            assert!(!matches_recurring(date(2024, 1, d), &p), "Jan {d}");
        }
    }

    #[test]
    fn last_monday_in_four_monday_month() {
        // February 2024: Mondays 5, 12, 19, 26.
        let p = RecurringPattern::every_month(Ordinal::Last, Weekday::Monday);
        assert!(matches_recurring(date(2024, 2, 26), &p));
        assert!(!matches_recurring(date(2024, 2, 19), &p));
    }

    #[test]
    fn nth_occurrence() {
        let p = RecurringPattern::every_month(Ordinal::Second, Weekday::Tuesday);
        assert!(matches_recurring(date(2024, 10, 8), &p));
        assert!(!matches_recurring(date(2024, 10, 1), &p));
        assert!(!matches_recurring(date(2024, 10, 9), &p)); // Wednesday
        let fourth = RecurringPattern::every_month(Ordinal::Fourth, Weekday::Tuesday);
        assert!(matches_recurring(date(2024, 10, 22), &fourth));
        assert!(!matches_recurring(date(2024, 10, 29), &fourth));
    }

    #[test]
    fn month_filter() {
        let mut p = RecurringPattern::every_month(Ordinal::Last, Weekday::Monday);
        p.months.insert(Month::May);
        assert!(matches_recurring(date(2024, 5, 27), &p));
        assert!(!matches_recurring(date(2024, 6, 24), &p));
    }

    #[test]
    fn first_match_wins() {
        let day = date(2024, 7, 1);
        let exceptions = vec![
            Exception::one_time(date(2024, 6, 30), OverrideStatus::Closed),
            Exception::recurring(
                RecurringPattern::every_month(Ordinal::First, Weekday::Monday),
                OverrideStatus::Closed,
            )
            .with_reason("Maintenance"),
            Exception::one_time(day, OverrideStatus::Open).with_reason("Canada Day"),
        ];
        let hit = match_exception(day, &exceptions).unwrap();
        assert_eq!(hit.reason.as_deref(), Some("Maintenance"));
        assert!(match_exception(date(2024, 7, 2), &exceptions).is_none());
        assert!(match_exception(day, &[]).is_none());
    }
}
