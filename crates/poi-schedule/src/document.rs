//! `ScheduleDocument`: the layered hours document stored per POI.

use std::collections::BTreeMap;

use poi_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::exception::Exception;
use crate::holiday::HolidaySpec;
use crate::hours::WeeklyHours;
use crate::season::SeasonSpec;

/// The root schedule document.
///
/// Every section is optional on the wire; a missing section is empty. Maps
/// are ordered by key so repeated resolutions see the same iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// Default weekly hours.
    #[serde(default)]
    pub regular: WeeklyHours,
    /// Named seasons.
    #[serde(default)]
    pub seasonal: BTreeMap<String, SeasonSpec>,
    /// Holidays by key.
    #[serde(default)]
    pub holidays: BTreeMap<String, HolidaySpec>,
    /// Exceptions in document order.
    #[serde(default)]
    pub exceptions: Vec<Exception>,
}

impl ScheduleDocument {
    /// A document with only regular hours.
    pub fn with_regular(regular: WeeklyHours) -> Self {
        ScheduleDocument {
            regular,
            ..Default::default()
        }
    }

    /// Load a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Document(e.to_string()))
    }

    /// Load a document from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::Document(e.to_string()))
    }

    /// Serialize to JSON text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Document(e.to_string()))
    }

    /// `true` if no layer holds any data.
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty()
            && self.seasonal.is_empty()
            && self.holidays.is_empty()
            && self.exceptions.is_empty()
    }
}
