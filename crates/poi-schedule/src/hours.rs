//! Day-level hours: status, periods, and time endpoints.

use std::collections::BTreeMap;

use poi_core::errors::Result;
use poi_time::{ClockTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a venue operates on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Closed all day.
    Closed,
    /// Open during the listed periods.
    Open,
    /// Open around the clock.
    #[serde(rename = "24hours")]
    TwentyFourHours,
    /// Visits by appointment only.
    Appointment,
}

/// One endpoint of an opening period.
///
/// Only [`TimeSpec::Fixed`] can be compared against a wall clock; the other
/// variants are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TimeSpecRepr", into = "TaggedTimeSpec")]
pub enum TimeSpec {
    /// A fixed 24-hour clock time.
    Fixed(ClockTime),
    /// Sunrise.
    Dawn,
    /// Sunset.
    Dusk,
    /// Depends on an appointment.
    Appointment,
    /// Call ahead.
    Call,
}

impl TimeSpec {
    /// The clock time, if this endpoint is fixed.
    pub fn fixed(&self) -> Option<ClockTime> {
        match self {
            TimeSpec::Fixed(t) => Some(*t),
            _ => None,
        }
    }
}

/// Accepts either `"09:00"` or `{"type": "fixed", "time": "09:00"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimeSpecRepr {
    Bare(ClockTime),
    Tagged(TaggedTimeSpec),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedTimeSpec {
    Fixed { time: ClockTime },
    Dawn,
    Dusk,
    Appointment,
    Call,
}

impl From<TimeSpecRepr> for TimeSpec {
    fn from(repr: TimeSpecRepr) -> Self {
        match repr {
            TimeSpecRepr::Bare(t) => TimeSpec::Fixed(t),
            TimeSpecRepr::Tagged(tagged) => tagged.into(),
        }
    }
}

impl From<TaggedTimeSpec> for TimeSpec {
    fn from(tagged: TaggedTimeSpec) -> Self {
        match tagged {
            TaggedTimeSpec::Fixed { time } => TimeSpec::Fixed(time),
            TaggedTimeSpec::Dawn => TimeSpec::Dawn,
            TaggedTimeSpec::Dusk => TimeSpec::Dusk,
            TaggedTimeSpec::Appointment => TimeSpec::Appointment,
            TaggedTimeSpec::Call => TimeSpec::Call,
        }
    }
}

impl From<TimeSpec> for TaggedTimeSpec {
    fn from(spec: TimeSpec) -> Self {
        match spec {
            TimeSpec::Fixed(time) => TaggedTimeSpec::Fixed { time },
            TimeSpec::Dawn => TaggedTimeSpec::Dawn,
            TimeSpec::Dusk => TaggedTimeSpec::Dusk,
            TimeSpec::Appointment => TaggedTimeSpec::Appointment,
            TimeSpec::Call => TaggedTimeSpec::Call,
        }
    }
}

/// An open/close pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Opening endpoint.
    pub open: TimeSpec,
    /// Closing endpoint.
    pub close: TimeSpec,
}

impl Period {
    /// A period between two fixed `HH:MM` times.
    pub fn fixed(open: &str, close: &str) -> Result<Self> {
        Ok(Period {
            open: TimeSpec::Fixed(open.parse()?),
            close: TimeSpec::Fixed(close.parse()?),
        })
    }

    /// Both endpoints as clock times, when both are fixed.
    pub fn fixed_bounds(&self) -> Option<(ClockTime, ClockTime)> {
        Some((self.open.fixed()?, self.close.fixed()?))
    }
}

/// Hours for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayHours {
    /// Operating status.
    pub status: DayStatus,
    /// Periods, in document order. Meaningful only when `status` is `Open`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub periods: Vec<Period>,
}

impl DayHours {
    /// Closed all day.
    pub fn closed() -> Self {
        DayHours {
            status: DayStatus::Closed,
            periods: Vec::new(),
        }
    }

    /// Open around the clock.
    pub fn twenty_four_hours() -> Self {
        DayHours {
            status: DayStatus::TwentyFourHours,
            periods: Vec::new(),
        }
    }

    /// By appointment only.
    pub fn appointment() -> Self {
        DayHours {
            status: DayStatus::Appointment,
            periods: Vec::new(),
        }
    }

    /// Open during `periods`.
    pub fn open(periods: Vec<Period>) -> Self {
        DayHours {
            status: DayStatus::Open,
            periods,
        }
    }
}

/// A weekday → hours table (`regular` in the document and in each season).
///
/// Keys are weekday names; matching ignores case. Keys that are not weekday
/// names are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyHours(BTreeMap<Weekday, DayHours>);

impl WeeklyHours {
    /// An empty table.
    pub fn new() -> Self {
        WeeklyHours(BTreeMap::new())
    }

    /// Hours for `weekday`, if configured.
    pub fn get(&self, weekday: Weekday) -> Option<&DayHours> {
        self.0.get(&weekday)
    }

    /// Set the hours for `weekday`, returning the previous entry.
    pub fn insert(&mut self, weekday: Weekday, hours: DayHours) -> Option<DayHours> {
        self.0.insert(weekday, hours)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, weekday: Weekday, hours: DayHours) -> Self {
        self.0.insert(weekday, hours);
        self
    }

    /// Configured days in Monday → Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        self.0.iter().map(|(w, h)| (*w, h))
    }

    /// `true` if no day is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Weekday, DayHours)> for WeeklyHours {
    fn from_iter<I: IntoIterator<Item = (Weekday, DayHours)>>(iter: I) -> Self {
        WeeklyHours(iter.into_iter().collect())
    }
}

impl Serialize for WeeklyHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(w, h)| (w.key(), h)))
    }
}

impl<'de> Deserialize<'de> for WeeklyHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, DayHours>::deserialize(deserializer)?;
        let mut table = BTreeMap::new();
        for (key, hours) in raw {
            match key.parse::<Weekday>() {
                Ok(weekday) => {
                    table.insert(weekday, hours);
                }
                Err(_) => tracing::debug!(key = %key, "ignoring non-weekday key in hours table"),
            }
        }
        Ok(WeeklyHours(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn time_spec_accepts_bare_and_tagged() {
        let bare: TimeSpec = serde_json::from_value(json!("09:00")).unwrap();
        let tagged: TimeSpec =
            serde_json::from_value(json!({"type": "fixed", "time": "09:00"})).unwrap();
        assert_eq!(bare, tagged);
        let dusk: TimeSpec = serde_json::from_value(json!({"type": "dusk"})).unwrap();
        assert_eq!(dusk, TimeSpec::Dusk);
        assert_eq!(dusk.fixed(), None);
        assert_eq!(
            serde_json::to_value(TimeSpec::Fixed("17:00".parse().unwrap())).unwrap(),
            json!({"type": "fixed", "time": "17:00"})
        );
    }

    #[test]
    fn day_status_names() {
        let h: DayHours = serde_json::from_value(json!({"status": "24hours"})).unwrap();
        assert_eq!(h, DayHours::twenty_four_hours());
        let h: DayHours = serde_json::from_value(json!({
            "status": "open",
            "periods": [{"open": "09:00", "close": "17:00"}]
        }))
        .unwrap();
        assert_eq!(h, DayHours::open(vec![Period::fixed("09:00", "17:00").unwrap()]));
    }

    #[test]
    fn weekly_table_keys() {
        let table: WeeklyHours = serde_json::from_value(json!({
            "monday": {"status": "closed"},
            "Tuesday": {"status": "appointment"},
            "notes": {"status": "closed"}
        }))
        .unwrap();
        assert_eq!(table.get(Weekday::Monday), Some(&DayHours::closed()));
        assert_eq!(table.get(Weekday::Tuesday), Some(&DayHours::appointment()));
        assert_eq!(table.iter().count(), 2);
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"monday": {"status": "closed"}, "tuesday": {"status": "appointment"}})
        );
    }
}
