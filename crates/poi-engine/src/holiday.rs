//! Holiday date calculator.
//!
//! A fixed registry maps holiday keys to a [`HolidayRule`]; the rule turns a
//! year into a date. Computation is pure per `(key, year)`.
//!
//! # Recognized keys
//!
//! | key | rule |
//! |---|---|
//! | `new_years_day` | Jan 1 |
//! | `mlk_day` | 3rd Monday of January |
//! | `presidents_day` | 3rd Monday of February |
//! | `valentines_day` | Feb 14 |
//! | `easter` | Anonymous Gregorian computus |
//! | `good_friday` | Easter − 2 days |
//! | `mothers_day` | 2nd Sunday of May |
//! | `memorial_day` | last Monday of May |
//! | `fathers_day` | 3rd Sunday of June |
//! | `juneteenth` | Jun 19 |
//! | `independence_day` | Jul 4 |
//! | `labor_day` | 1st Monday of September |
//! | `columbus_day` | 2nd Monday of October |
//! | `halloween` | Oct 31 |
//! | `veterans_day` | Nov 11 |
//! | `thanksgiving` | 4th Thursday of November |
//! | `black_friday` | Thanksgiving + 1 day |
//! | `christmas_eve` | Dec 24 |
//! | `christmas` | Dec 25 |
//! | `new_years_eve` | Dec 31 |
//!
//! Lookups ignore case and the separators `_`, `-`, space, and apostrophe,
//! so `newYearsDay` and `new-years-day` resolve to the same entry.

use poi_core::utilities::data_formatters::title_case;
use poi_schedule::{HolidaySpec, OverrideStatus, ScheduleDocument};
use poi_time::{easter_sunday, Date, Month, Weekday};
use serde::Serialize;

/// How a holiday's date is derived from the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month/day every year.
    FixedDate {
        /// Month.
        month: Month,
        /// Day of month.
        day: u8,
    },
    /// The `n`-th `weekday` of `month`.
    NthWeekday {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
        /// Occurrence (1-based).
        n: u8,
    },
    /// The last `weekday` of `month`.
    LastWeekday {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
    },
    /// Easter Sunday.
    Easter,
    /// Easter Sunday shifted by a number of days.
    EasterOffset(i32),
    /// Another registry holiday shifted by a number of days.
    HolidayOffset {
        /// Key of the base holiday.
        base: &'static str,
        /// Shift in days.
        days: i32,
    },
}

impl HolidayRule {
    /// The date this rule produces in `year`, or `None` if it falls outside
    /// the supported calendar.
    pub fn date_in(&self, year: u16) -> Option<Date> {
        match *self {
            HolidayRule::FixedDate { month, day } => Date::from_ymd(year, month.number(), day).ok(),
            HolidayRule::NthWeekday { month, weekday, n } => {
                Date::nth_weekday(n, weekday, year, month.number()).ok()
            }
            HolidayRule::LastWeekday { month, weekday } => {
                Date::last_weekday(weekday, year, month.number()).ok()
            }
            HolidayRule::Easter => easter_sunday(year).ok(),
            HolidayRule::EasterOffset(days) => easter_sunday(year).ok()?.add_days(days).ok(),
            HolidayRule::HolidayOffset { base, days } => {
                compute_holiday_date(base, year)?.add_days(days).ok()
            }
        }
    }
}

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayEntry {
    /// Canonical key.
    pub key: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Date rule.
    pub rule: HolidayRule,
    /// Additional accepted keys.
    pub aliases: &'static [&'static str],
}

const fn fixed(key: &'static str, name: &'static str, month: Month, day: u8) -> HolidayEntry {
    HolidayEntry {
        key,
        name,
        rule: HolidayRule::FixedDate { month, day },
        aliases: &[],
    }
}

const fn nth(
    key: &'static str,
    name: &'static str,
    n: u8,
    weekday: Weekday,
    month: Month,
) -> HolidayEntry {
    HolidayEntry {
        key,
        name,
        rule: HolidayRule::NthWeekday { month, weekday, n },
        aliases: &[],
    }
}

const fn aliased(entry: HolidayEntry, aliases: &'static [&'static str]) -> HolidayEntry {
    HolidayEntry { aliases, ..entry }
}

const ENTRIES: [HolidayEntry; 20] = [
    fixed("new_years_day", "New Year's Day", Month::January, 1),
    aliased(
        nth("mlk_day", "Martin Luther King Jr. Day", 3, Weekday::Monday, Month::January),
        &["mlk", "martin_luther_king_day", "martin_luther_king_jr_day"],
    ),
    aliased(
        nth("presidents_day", "Presidents' Day", 3, Weekday::Monday, Month::February),
        &["washingtons_birthday"],
    ),
    fixed("valentines_day", "Valentine's Day", Month::February, 14),
    HolidayEntry {
        key: "easter",
        name: "Easter",
        rule: HolidayRule::Easter,
        aliases: &["easter_sunday"],
    },
    HolidayEntry {
        key: "good_friday",
        name: "Good Friday",
        rule: HolidayRule::EasterOffset(-2),
        aliases: &[],
    },
    nth("mothers_day", "Mother's Day", 2, Weekday::Sunday, Month::May),
    HolidayEntry {
        key: "memorial_day",
        name: "Memorial Day",
        rule: HolidayRule::LastWeekday {
            month: Month::May,
            weekday: Weekday::Monday,
        },
        aliases: &[],
    },
    nth("fathers_day", "Father's Day", 3, Weekday::Sunday, Month::June),
    fixed("juneteenth", "Juneteenth", Month::June, 19),
    aliased(
        fixed("independence_day", "Independence Day", Month::July, 4),
        &["fourth_of_july", "july_4th"],
    ),
    aliased(
        nth("labor_day", "Labor Day", 1, Weekday::Monday, Month::September),
        &["labour_day"],
    ),
    nth("columbus_day", "Columbus Day", 2, Weekday::Monday, Month::October),
    fixed("halloween", "Halloween", Month::October, 31),
    fixed("veterans_day", "Veterans Day", Month::November, 11),
    aliased(
        nth("thanksgiving", "Thanksgiving", 4, Weekday::Thursday, Month::November),
        &["thanksgiving_day"],
    ),
    HolidayEntry {
        key: "black_friday",
        name: "Black Friday",
        rule: HolidayRule::HolidayOffset {
            base: "thanksgiving",
            days: 1,
        },
        aliases: &[],
    },
    fixed("christmas_eve", "Christmas Eve", Month::December, 24),
    aliased(
        fixed("christmas", "Christmas Day", Month::December, 25),
        &["christmas_day", "xmas"],
    ),
    fixed("new_years_eve", "New Year's Eve", Month::December, 31),
];

/// The built-in holiday registry.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRegistry {
    entries: &'static [HolidayEntry],
}

impl HolidayRegistry {
    /// The standard registry.
    pub const STANDARD: HolidayRegistry = HolidayRegistry { entries: &ENTRIES };

    /// All entries, in calendar-ish order.
    pub fn entries(&self) -> &'static [HolidayEntry] {
        self.entries
    }

    /// Look up a key or alias.
    pub fn get(&self, key: &str) -> Option<&'static HolidayEntry> {
        let wanted = normalize_key(key);
        if wanted.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| {
            std::iter::once(e.key)
                .chain(e.aliases.iter().copied())
                .any(|name| normalized_chars(name).eq(wanted.chars()))
        })
    }

    /// The date of `key` in `year`, or `None` for unknown keys.
    pub fn compute(&self, key: &str, year: u16) -> Option<Date> {
        self.get(key)?.rule.date_in(year)
    }
}

impl Default for HolidayRegistry {
    fn default() -> Self {
        HolidayRegistry::STANDARD
    }
}

fn normalized_chars(key: &str) -> impl Iterator<Item = char> + '_ {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' ' | '\'' | '’'))
        .flat_map(char::to_lowercase)
}

fn normalize_key(key: &str) -> String {
    normalized_chars(key).collect()
}

/// The date of registry holiday `key` in `year`.
///
/// Returns `None` for keys the registry does not know; such holidays need an
/// explicit `date` in the document.
///
/// # Example
/// ```
/// use poi_engine::compute_holiday_date;
/// use poi_time::Date;
/// assert_eq!(
///     compute_holiday_date("thanksgiving", 2024),
///     Some(Date::from_ymd(2024, 11, 28).unwrap())
/// );
/// assert_eq!(compute_holiday_date("founders_day", 2024), None);
/// ```
pub fn compute_holiday_date(key: &str, year: u16) -> Option<Date> {
    HolidayRegistry::STANDARD.compute(key, year)
}

/// The date a document holiday falls on in `year`: the registry rule for
/// known keys, otherwise the entry's own `MM-DD`.
pub fn holiday_date(key: &str, spec: &HolidaySpec, year: u16) -> Option<Date> {
    match HolidayRegistry::STANDARD.get(key) {
        Some(entry) => entry.rule.date_in(year),
        None => spec.date?.in_year(year).ok(),
    }
}

/// The label shown for a holiday: the document's `name`, the registry name,
/// or the title-cased key.
pub fn holiday_display_name(key: &str, spec: &HolidaySpec) -> String {
    if let Some(name) = spec.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    match HolidayRegistry::STANDARD.get(key) {
        Some(entry) => entry.name.to_string(),
        None => title_case(key),
    }
}

/// The next date on or after `today` that the holiday falls on.
///
/// Computes the date in `today`'s year and rolls forward a year when it has
/// already passed. A custom `02-29` keeps rolling until a leap year.
pub fn next_occurrence(key: &str, spec: &HolidaySpec, today: Date) -> Option<Date> {
    let year = today.year();
    (year..=year.saturating_add(8))
        .filter_map(|y| holiday_date(key, spec, y))
        .find(|d| *d >= today)
}

/// A configured holiday with its next occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingHoliday {
    /// Document key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Next occurrence on or after the reference day.
    pub date: Date,
    /// Configured status.
    pub status: OverrideStatus,
}

/// Every holiday in `document` with its next occurrence, soonest first.
///
/// Holidays whose date cannot be determined (unknown key without `date`) are
/// left out.
pub fn upcoming_holidays(document: &ScheduleDocument, today: Date) -> Vec<UpcomingHoliday> {
    let mut out: Vec<UpcomingHoliday> = document
        .holidays
        .iter()
        .filter_map(|(key, spec)| {
            let date = next_occurrence(key, spec, today)?;
            Some(UpcomingHoliday {
                key: key.clone(),
                name: holiday_display_name(key, spec),
                date,
                status: spec.status,
            })
        })
        .collect();
    out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.key.cmp(&b.key)));
    out
}
