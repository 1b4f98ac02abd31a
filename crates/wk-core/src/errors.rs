//! Error types for workalendar-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `fail!` macro is
//! shorthand for an early `Runtime` return.

use thiserror::Error;

/// The top-level error type used throughout workalendar-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument passed at a call boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The calendar does not define the policy the operation needs
    /// (e.g. a calendar without weekend days asked for working-day logic).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A calendrical conversion table does not cover the requested year.
    #[error("{calendar} year {year} not supported (supported range [{min}, {max}])")]
    UnsupportedYear {
        /// Name of the calendar system doing the conversion.
        calendar: &'static str,
        /// The year that was requested.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },
}

/// Shorthand `Result` type used throughout workalendar-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use wk_core::{fail, errors::Error};
/// fn always_err() -> wk_core::errors::Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_year_message() {
        let err = Error::UnsupportedYear {
            calendar: "lunar",
            year: 2150,
            min: 1900,
            max: 2099,
        };
        assert_eq!(
            err.to_string(),
            "lunar year 2150 not supported (supported range [1900, 2099])"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
