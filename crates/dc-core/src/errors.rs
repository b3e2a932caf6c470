//! Error types for daycal.
//!
//! Every failure a query or a build can produce is a variant of the single
//! `thiserror`-derived [`Error`] enum.  Malformed input and unloaded years are
//! reported as values, never as panics, so that a transport layer can turn
//! them into a user-facing message.  The `ensure!` and `fail!` convenience
//! macros build the generic variants.

use thiserror::Error;

/// The top-level error type used throughout daycal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date, month, or year string is malformed: not the expected number of
    /// ASCII digits, or not a valid calendar date.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending input string.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The referenced year has no loaded index.
    #[error("year {year} is not loaded")]
    RangeNotLoaded {
        /// The year that was requested.
        year: u16,
    },

    /// A half-open range whose start lies after its end.
    #[error("invalid range [{start}, {end}): start is after end")]
    InvalidRange {
        /// Start of the requested range.
        start: String,
        /// End of the requested range.
        end: String,
    },

    /// A configuration or override file could not be read or decoded.
    #[error("cannot read configuration: {0}")]
    ConfigRead(String),

    /// A single override entry has a bad key or value.
    #[error("malformed override entry {key:?}: {reason}")]
    MalformedOverride {
        /// The override key as it appeared in the file.
        key: String,
        /// What was wrong with the entry.
        reason: String,
    },

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Shorthand for building an [`Error::Parse`].
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Return `true` for errors caused by the caller's input (as opposed to
    /// configuration or internal failures).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::RangeNotLoaded { .. } | Error::InvalidRange { .. }
        )
    }
}

/// Shorthand `Result` type used throughout daycal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dc_core::{ensure, errors::Error};
/// fn ordered(a: u16, b: u16) -> dc_core::errors::Result<u16> {
///     ensure!(a <= b, "{a} must not exceed {b}");
///     Ok(b - a)
/// }
/// assert!(ordered(2016, 2020).is_ok());
/// assert!(ordered(2020, 2016).is_err());
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

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use dc_core::{fail, errors::Error};
/// fn always_err() -> dc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
