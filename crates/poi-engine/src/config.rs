//! Resolver options.
//!
//! The only tunables are the fallback labels the resolver attaches when a
//! document leaves them out. They deserialize from camelCase JSON so a host
//! application can keep them next to its other settings.

use serde::{Deserialize, Serialize};

/// Labels used by the resolver when the document does not supply one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Label for a one-time exception without a `reason`.
    pub one_time_exception_label: String,
    /// Label for a recurring exception without a `reason`.
    pub recurring_exception_label: String,
    /// Appended to the title-cased season name (`"Summer" + " Hours"`).
    pub season_label_suffix: String,
    /// Status text when no layer yields hours.
    pub hours_not_set_text: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            one_time_exception_label: "Special Hours".to_string(),
            recurring_exception_label: "Modified Schedule".to_string(),
            season_label_suffix: " Hours".to_string(),
            hours_not_set_text: "Hours not set".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let o: ResolverOptions =
            serde_json::from_str(r#"{"recurringExceptionLabel": "Reduced Hours"}"#).unwrap();
        assert_eq!(o.recurring_exception_label, "Reduced Hours");
        assert_eq!(o.one_time_exception_label, "Special Hours");
        assert_eq!(o.season_label_suffix, " Hours");
    }
}
