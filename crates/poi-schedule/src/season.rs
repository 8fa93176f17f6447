//! Seasonal schedules.

use poi_time::MonthDay;
use serde::{Deserialize, Serialize};

use crate::hours::WeeklyHours;

/// A named season with its own weekly table.
///
/// With `useDateRange` set, the season is active between `startDate` and
/// `endDate` (inclusive, `MM-DD`, wrapping over New Year when the end
/// precedes the start). Without it, well-known season names fall back to
/// calendar-quarter months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSpec {
    /// Use the explicit `start_date` / `end_date` window.
    #[serde(default)]
    pub use_date_range: bool,
    /// First day of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<MonthDay>,
    /// Last day of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MonthDay>,
    /// Weekday hours while the season is active.
    #[serde(default)]
    pub regular: WeeklyHours,
}

impl SeasonSpec {
    /// The explicit window, when enabled and fully specified.
    pub fn date_range(&self) -> Option<(MonthDay, MonthDay)> {
        if !self.use_date_range {
            return None;
        }
        Some((self.start_date?, self.end_date?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn range_requires_flag_and_bounds() {
        let s: SeasonSpec = serde_json::from_value(json!({
            "useDateRange": true,
            "startDate": "12-01",
            "endDate": "02-28",
            "regular": {}
        }))
        .unwrap();
        let (start, end) = s.date_range().unwrap();
        assert_eq!(start.to_string(), "12-01");
        assert_eq!(end.to_string(), "02-28");

        let no_flag = SeasonSpec {
            use_date_range: false,
            ..s.clone()
        };
        assert!(no_flag.date_range().is_none());

        let half = SeasonSpec {
            end_date: None,
            ..s
        };
        assert!(half.date_range().is_none());
    }
}
