//! Holiday entries and the override status shared with exceptions.

use poi_time::MonthDay;
use serde::{Deserialize, Serialize};

use crate::hours::Period;

/// How a holiday or exception changes the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideStatus {
    /// Operates as usual.
    Open,
    /// Closed all day.
    Closed,
    /// Operates during the entry's own periods.
    Modified,
}

/// A holiday entry, keyed in the document by a registry key (e.g.
/// `thanksgiving`) or a custom key carrying its own `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySpec {
    /// Override status.
    pub status: OverrideStatus,
    /// Hours when `status` is `Modified`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub periods: Vec<Period>,
    /// Display name overriding the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fixed `MM-DD` date for custom holidays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<MonthDay>,
}

impl HolidaySpec {
    /// A holiday with the given status and nothing else set.
    pub fn new(status: OverrideStatus) -> Self {
        HolidaySpec {
            status,
            periods: Vec::new(),
            name: None,
            date: None,
        }
    }
}
