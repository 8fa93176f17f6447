//! One-time and recurring exceptions.
//!
//! Recurring patterns are parsed into typed values when the document is
//! loaded, so an unknown ordinal, weekday, or month fails the load instead of
//! silently never matching.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use poi_core::errors::{Error, Result};
use poi_time::{Date, Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::holiday::OverrideStatus;
use crate::hours::Period;

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ordinal {
    /// Days 1–7.
    First,
    /// Days 8–14.
    Second,
    /// Days 15–21.
    Third,
    /// Days 22–28.
    Fourth,
    /// The final occurrence in the month.
    Last,
}

impl Ordinal {
    /// Week-of-month number (1–4), or `None` for [`Ordinal::Last`].
    pub fn week_number(&self) -> Option<u8> {
        match self {
            Ordinal::First => Some(1),
            Ordinal::Second => Some(2),
            Ordinal::Third => Some(3),
            Ordinal::Fourth => Some(4),
            Ordinal::Last => None,
        }
    }

    /// Lowercase document key.
    pub fn key(&self) -> &'static str {
        match self {
            Ordinal::First => "first",
            Ordinal::Second => "second",
            Ordinal::Third => "third",
            Ordinal::Fourth => "fourth",
            Ordinal::Last => "last",
        }
    }
}

impl FromStr for Ordinal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1" => Ok(Ordinal::First),
            "second" | "2" => Ok(Ordinal::Second),
            "third" | "3" => Ok(Ordinal::Third),
            "fourth" | "4" => Ok(Ordinal::Fourth),
            "last" => Ok(Ordinal::Last),
            _ => Err(Error::parse("ordinal", s)),
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// "The `ordinal` `day_of_week` of every month in `months`".
///
/// An empty `months` set means every month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurringPattern {
    /// Which occurrence.
    pub ordinal: Ordinal,
    /// Which weekday.
    pub day_of_week: Weekday,
    /// Restricting months; empty = all.
    pub months: BTreeSet<Month>,
}

impl RecurringPattern {
    /// A pattern that applies in every month.
    pub fn every_month(ordinal: Ordinal, day_of_week: Weekday) -> Self {
        RecurringPattern {
            ordinal,
            day_of_week,
            months: BTreeSet::new(),
        }
    }

    /// Human description, e.g. `"Last Monday of every month"` or
    /// `"Second Tuesday of March, June"`.
    pub fn describe(&self) -> String {
        let ord = self.ordinal.key();
        let mut out = String::with_capacity(32);
        out.push_str(&ord[..1].to_ascii_uppercase());
        out.push_str(&ord[1..]);
        out.push(' ');
        out.push_str(self.day_of_week.long_name());
        if self.months.is_empty() {
            out.push_str(" of every month");
        } else {
            let names: Vec<&str> = self.months.iter().map(|m| m.long_name()).collect();
            out.push_str(" of ");
            out.push_str(&names.join(", "));
        }
        out
    }
}

/// When an exception applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExceptionRule {
    /// A single calendar date.
    OneTime(Date),
    /// A recurring weekday pattern.
    Recurring(RecurringPattern),
}

/// An exception record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawException", into = "RawException")]
pub struct Exception {
    /// When it applies.
    pub rule: ExceptionRule,
    /// What it does.
    pub status: OverrideStatus,
    /// Hours when `status` is `Modified`.
    pub periods: Vec<Period>,
    /// Display reason, used as the label.
    pub reason: Option<String>,
}

impl Exception {
    /// A one-time exception on `date`.
    pub fn one_time(date: Date, status: OverrideStatus) -> Self {
        Exception {
            rule: ExceptionRule::OneTime(date),
            status,
            periods: Vec::new(),
            reason: None,
        }
    }

    /// A recurring exception.
    pub fn recurring(pattern: RecurringPattern, status: OverrideStatus) -> Self {
        Exception {
            rule: ExceptionRule::Recurring(pattern),
            status,
            periods: Vec::new(),
            reason: None,
        }
    }

    /// Builder: set the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Builder: set the periods.
    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    /// `true` for recurring exceptions.
    pub fn is_recurring(&self) -> bool {
        matches!(self.rule, ExceptionRule::Recurring(_))
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawException {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<RawPattern>,
    status: OverrideStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    periods: Vec<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPattern {
    ordinal: String,
    day_of_week: String,
    #[serde(default)]
    months: Vec<MonthRepr>,
}

/// Months arrive as strings (`"3"`) in stored documents; bare numbers are
/// accepted too.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MonthRepr {
    Number(u8),
    Text(String),
}

impl TryFrom<RawPattern> for RecurringPattern {
    type Error = Error;

    fn try_from(raw: RawPattern) -> Result<Self> {
        let months = raw
            .months
            .into_iter()
            .map(|m| match m {
                MonthRepr::Number(n) => {
                    Month::from_number(n).ok_or_else(|| Error::parse("month", n.to_string()))
                }
                MonthRepr::Text(s) => s.parse(),
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(RecurringPattern {
            ordinal: raw.ordinal.parse()?,
            day_of_week: raw.day_of_week.parse()?,
            months,
        })
    }
}

impl TryFrom<RawException> for Exception {
    type Error = Error;

    fn try_from(raw: RawException) -> Result<Self> {
        let rule = match raw.kind.as_deref() {
            Some("recurring") => {
                let pattern = raw.pattern.ok_or_else(|| {
                    Error::Document("recurring exception without a pattern".into())
                })?;
                ExceptionRule::Recurring(pattern.try_into()?)
            }
            None | Some("one-time") | Some("onetime") | Some("single") => {
                let date = raw
                    .date
                    .ok_or_else(|| Error::Document("one-time exception without a date".into()))?;
                // Stored values are sometimes full timestamps; only the day counts.
                let day = date.get(..10).unwrap_or(date.as_str());
                ExceptionRule::OneTime(day.parse()?)
            }
            Some(other) => {
                return Err(Error::Document(format!("unknown exception type {other:?}")))
            }
        };
        Ok(Exception {
            rule,
            status: raw.status,
            periods: raw.periods,
            reason: raw.reason,
        })
    }
}

impl From<Exception> for RawException {
    fn from(e: Exception) -> Self {
        let (kind, date, pattern) = match e.rule {
            ExceptionRule::OneTime(d) => (None, Some(d.to_string()), None),
            ExceptionRule::Recurring(p) => (
                Some("recurring".to_string()),
                None,
                Some(RawPattern {
                    ordinal: p.ordinal.key().to_string(),
                    day_of_week: p.day_of_week.key().to_string(),
                    months: p
                        .months
                        .iter()
                        .map(|m| MonthRepr::Text(m.number().to_string()))
                        .collect(),
                }),
            ),
        };
        RawException {
            kind,
            date,
            pattern,
            status: e.status,
            periods: e.periods,
            reason: e.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_time_from_json() {
        let e: Exception = serde_json::from_value(json!({
            "date": "2024-07-05",
            "status": "closed",
            "reason": "Staff picnic"
        }))
        .unwrap();
        assert_eq!(
            e.rule,
            ExceptionRule::OneTime(Date::from_ymd(2024, 7, 5).unwrap())
        );
        assert_eq!(e.status, OverrideStatus::Closed);
        assert_eq!(e.reason.as_deref(), Some("Staff picnic"));
        assert!(!e.is_recurring());
    }

    #[test]
    fn one_time_accepts_timestamp() {
        let e: Exception = serde_json::from_value(json!({
            "date": "2024-07-05T00:00:00.000Z",
            "status": "closed"
        }))
        .unwrap();
        assert_eq!(
            e.rule,
            ExceptionRule::OneTime(Date::from_ymd(2024, 7, 5).unwrap())
        );
    }

    #[test]
    fn recurring_from_json() {
        let e: Exception = serde_json::from_value(json!({
            "type": "recurring",
            "pattern": {"ordinal": "last", "dayOfWeek": "monday", "months": ["1", "12", 6]},
            "status": "modified",
            "periods": [{"open": "10:00", "close": "14:00"}]
        }))
        .unwrap();
        let ExceptionRule::Recurring(p) = &e.rule else {
            panic!("expected recurring rule");
        };
        assert_eq!(p.ordinal, Ordinal::Last);
        assert_eq!(p.day_of_week, Weekday::Monday);
        assert_eq!(
            p.months.iter().copied().collect::<Vec<_>>(),
            vec![Month::January, Month::June, Month::December]
        );
        assert_eq!(e.periods.len(), 1);
    }

    #[test]
    fn malformed_patterns_fail_fast() {
        for pattern in [
            json!({"ordinal": "fifth", "dayOfWeek": "monday"}),
            json!({"ordinal": "first", "dayOfWeek": "funday"}),
            json!({"ordinal": "first", "dayOfWeek": "monday", "months": ["13"]}),
        ] {
            let r = serde_json::from_value::<Exception>(json!({
                "type": "recurring",
                "pattern": pattern,
                "status": "closed"
            }));
            assert!(r.is_err(), "{pattern} should be rejected");
        }
        assert!(serde_json::from_value::<Exception>(json!({
            "type": "recurring",
            "status": "closed"
        }))
        .is_err());
        assert!(serde_json::from_value::<Exception>(json!({"status": "closed"})).is_err());
    }

    #[test]
    fn serializes_back_to_document_shape() {
        let e = Exception::recurring(
            RecurringPattern::every_month(Ordinal::First, Weekday::Tuesday),
            OverrideStatus::Closed,
        )
        .with_reason("Inventory");
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            json!({
                "type": "recurring",
                "pattern": {"ordinal": "first", "dayOfWeek": "tuesday", "months": []},
                "status": "closed",
                "reason": "Inventory"
            })
        );
    }

    #[test]
    fn describe_pattern() {
        let mut p = RecurringPattern::every_month(Ordinal::Last, Weekday::Monday);
        assert_eq!(p.describe(), "Last Monday of every month");
        p.months.insert(Month::June);
        p.months.insert(Month::March);
        assert_eq!(p.describe(), "Last Monday of March, June");
    }
}
