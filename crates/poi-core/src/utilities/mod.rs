//! Text helpers for dates, clock times, and labels.

/// Display helpers (12-hour clock, title case).
pub mod data_formatters;

/// Parsers for `YYYY-MM-DD`, `MM-DD`, and `HH:MM` strings.
pub mod data_parsers;
