//! Data parsing helpers.
//!
//! Schedule documents carry dates and times as short strings. These helpers
//! split them into their numeric parts; range checks on the parts belong to
//! the typed constructors in `poi-time`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let year: u16 = parse_digits(parts.next()?, 4)?;
    let month: u8 = parse_digits(parts.next()?, 2)?;
    let day: u8 = parse_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Parse a yearless month/day string (`MM-DD`).
///
/// Returns `(month, day)` on success.
pub fn parse_month_day(s: &str) -> Option<(u8, u8)> {
    let (m, d) = s.trim().split_once('-')?;
    Some((parse_digits(m, 2)?, parse_digits(d, 2)?))
}

/// Parse a 24-hour clock string (`HH:MM`, the hour may have one digit).
///
/// Returns `(hour, minute)` on success. No range check is applied.
pub fn parse_clock(s: &str) -> Option<(u8, u8)> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    Some((parse_digits(h, 2)?, parse_digits(m, 2)?))
}

/// Parse an all-digit field of at most `max_len` characters.
fn parse_digits<T: std::str::FromStr>(field: &str, max_len: usize) -> Option<T> {
    if field.is_empty() || field.len() > max_len || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
