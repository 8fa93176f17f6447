//! Data formatting helpers.
//!
//! Display strings shown next to resolved hours: 12-hour clock times
//! (`"9:00am"`) and title-cased keys (`"new_years_day"` → `"New Years Day"`).

/// Format a 24-hour clock value as a lowercase 12-hour string.
///
/// `(0, 0)` → `"12:00am"`, `(12, 30)` → `"12:30pm"`, `(17, 0)` → `"5:00pm"`.
pub fn format_clock_12h(hour: u8, minute: u8) -> String {
    let suffix = if hour < 12 { "am" } else { "pm" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12}:{minute:02}{suffix}")
}

/// Title-case a machine key, splitting on `_`, `-`, and whitespace.
pub fn title_case(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
