//! Process-wide settings.
//!
//! [`Settings`] holds the **evaluation date**: the date treated as "today"
//! when a caller asks for the holidays of the current year without naming
//! it.  It is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! The date is stored as a serial number (1 = January 1, 1900) so that this
//! crate does not depend on the date type defined in `wk-time`.  Tests that
//! pin the evaluation date should reset it when done.

use parking_lot::Mutex;
use std::sync::OnceLock;

/// Process-wide settings used by workalendar-rs.
pub struct Settings {
    /// The pinned evaluation date (days since December 31, 1899).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the pinned evaluation date serial number, or `None` when the
    /// system clock should be used.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.evaluation_date.lock()
    }

    /// Pin the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.evaluation_date.lock() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.evaluation_date.lock() = None;
    }
}
