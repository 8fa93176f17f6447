//! # poi-hours
//!
//! Works out when a point of interest is actually open. A schedule document
//! layers one-time and recurring exceptions, holidays, and seasonal tables on
//! top of regular weekly hours; this crate resolves any date to the hours
//! that apply and reports open/closed status for a local date-time.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `poi-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use poi_hours::engine::is_open_now;
//! use poi_hours::schedule::ScheduleDocument;
//!
//! let doc = ScheduleDocument::from_json(r#"{
//!     "regular": {"monday": {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]}},
//!     "holidays": {"christmas": {"status": "closed"}}
//! }"#).unwrap();
//!
//! let status = is_open_now(&doc, "2023-12-25T10:00".parse().unwrap());
//! assert!(!status.is_open);
//! assert_eq!(status.status, "Closed - Christmas Day");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and string utilities.
pub use poi_core as core;

/// Dates, weekdays, months, clock times, and Easter.
pub use poi_time as time;

/// The schedule document model.
pub use poi_schedule as schedule;

/// Resolution, open status, week projection, and formatting.
pub use poi_engine as engine;
