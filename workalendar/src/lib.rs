//! # workalendar
//!
//! Region-aware holiday calendars and working-day arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workalendar = "0.1"
//! ```
//!
//! ```rust
//! use workalendar::time::calendars::France;
//! use workalendar::time::{Calendar, Date};
//!
//! let france = France::new()?;
//! let bastille_day = Date::from_ymd(2013, 7, 14)?;
//! assert!(france.is_holiday(bastille_day)?);
//!
//! // 2013-07-12 is a Friday; the 14th is a Sunday and the 15th a Monday.
//! let friday = Date::from_ymd(2013, 7, 12)?;
//! assert_eq!(france.add_working_days(friday, 1)?, Date::from_ymd(2013, 7, 15)?);
//! # Ok::<(), workalendar::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error taxonomy and global settings.
pub use wk_core as core;

/// Dates, holiday rules, converters, and calendars.
pub use wk_time as time;
