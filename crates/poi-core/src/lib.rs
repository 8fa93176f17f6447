//! # poi-core
//!
//! Core building blocks shared across the poi-hours workspace: the error
//! hierarchy, the `ensure!` macro, and the small text parsers and
//! formatters used by the calendar and schedule crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Text parsing and formatting helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
