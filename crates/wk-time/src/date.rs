//! `Date` type and month/weekday arithmetic.
//!
//! Dates are stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31 (proleptic Gregorian).

use crate::weekday::Weekday;
use chrono::{Datelike, NaiveDate};
use wk_core::errors::{Error, Result};
use wk_core::Settings;

/// First supported Gregorian year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported Gregorian year.
pub const MAX_YEAR: u16 = 2199;

/// Julian day number of serial 0 (December 31, 1899).
const JULIAN_DAY_OFFSET: i32 = 2_415_020;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (before the epoch) or past
    /// [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a (chronological) Julian day number.
    ///
    /// Used by the arithmetic calendar converters, which all count days on
    /// the Julian day scale.
    pub fn from_julian_day(jdn: i32) -> Result<Self> {
        Self::from_serial(jdn - JULIAN_DAY_OFFSET)
    }

    /// Convert a `chrono` date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        // chrono guarantees month/day are in range
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    /// Return "today".
    ///
    /// Uses the evaluation date pinned in [`Settings`] when there is one,
    /// otherwise the local date of the system clock.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Self::from_serial(serial),
            None => Self::from_naive(chrono::Local::now().date_naive()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the Julian day number.
    pub fn julian_day(&self) -> i32 {
        self.0 + JULIAN_DAY_OFFSET
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // January 1, 1900 is a Monday
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Convert to a `chrono` date (always `Some` for a valid date).
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let (y, m, d) = ymd_from_serial(self.0);
        NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: {self:?} + {n} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the next calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Return the previous calendar day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month(y, m);
        Date(serial_from_ymd(y, m, last))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Month / weekday arithmetic ────────────────────────────────────────────────

/// Return the *n*-th occurrence of `weekday` in `month` of `year`.
///
/// Occurrences are counted in ascending order from the 1st of the month, or
/// from `start` when it is later than the 1st; `start` itself counts when it
/// falls on `weekday`.  Returns `Ok(None)` when the month has fewer than `n`
/// such days left (e.g. a 6th Monday).
///
/// # Errors
/// `InvalidArgument` if `n` is zero, `Date` if `year`/`month` are invalid.
pub fn nth_weekday_in_month(
    year: u16,
    month: u8,
    weekday: Weekday,
    n: u8,
    start: Option<Date>,
) -> Result<Option<Date>> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "nth_weekday_in_month: n must be >= 1".into(),
        ));
    }
    let first = Date::from_ymd(year, month, 1)?;
    let origin = match start {
        Some(s) if s > first => s,
        _ => first,
    };
    let skip = weekday.days_since(origin.weekday());
    let serial = origin.0 + skip + 7 * (n as i32 - 1);
    if serial > first.end_of_month().0 {
        return Ok(None);
    }
    Ok(Some(Date(serial)))
}

/// Return the last occurrence of `weekday` in `month` of `year`.
pub fn last_weekday_in_month(year: u16, month: u8, weekday: Weekday) -> Result<Date> {
    let last = Date::from_ymd(year, month, 1)?.end_of_month();
    let back = last.weekday().days_since(weekday);
    Ok(Date(last.0 - back))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given year.
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number (1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    // Days in months 1..m for the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
