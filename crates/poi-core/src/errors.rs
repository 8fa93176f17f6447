//! Error types for poi-hours.
//!
//! Everything fallible in the workspace (date construction, text parsing,
//! document loading) reports through a single `thiserror`-derived enum.
//! Resolving hours for a date is never fallible; only building the inputs is.

use thiserror::Error;

/// The top-level error type used throughout poi-hours.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic went out of range.
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed into the expected shape.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was being parsed (e.g. `"clock time"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },

    /// A schedule document failed to load.
    #[error("invalid schedule document: {0}")]
    Document(String),
}

impl Error {
    /// Shorthand for [`Error::Parse`].
    pub fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Error::Parse {
            what,
            input: input.into(),
        }
    }
}

/// Shorthand `Result` type used throughout poi-hours.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use poi_core::{ensure, errors::Error};
/// fn positive(x: i32) -> poi_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
