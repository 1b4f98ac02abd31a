//! Chinese / Korean lunisolar calendar, table driven.
//!
//! Each lunar year from 1900 to 2099 is packed in 17 bits:
//!
//! * bits 4–15: month sizes, month 1 in bit 15 down to month 12 in bit 4
//!   (set = 30 days, clear = 29 days);
//! * bits 0–3: index of the intercalary (leap) month, 0 when there is none;
//! * bit 16: size of the leap month (set = 30 days).
//!
//! Lunar 1900-01-01 fell on Gregorian 1900-01-31.

use crate::date::Date;
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, WeekendDefinition};
use wk_core::errors::{Error, Result};

/// First lunar year covered by the table.
pub const LUNAR_MIN_YEAR: u16 = 1900;

/// Last lunar year covered by the table.
pub const LUNAR_MAX_YEAR: u16 = 2099;

#[rustfmt::skip]
static LUNAR_INFO: [u32; 200] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
];

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Lunar year.
    pub year: u16,
    /// Lunar month (1–12).
    pub month: u8,
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// `true` when `month` is the intercalary repetition of that month.
    pub is_leap_month: bool,
}

fn info(year: u16) -> u32 {
    LUNAR_INFO[(year - LUNAR_MIN_YEAR) as usize]
}

fn check_year(year: u16) -> Result<()> {
    if !(LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            calendar: "lunar",
            year: year as i32,
            min: LUNAR_MIN_YEAR as i32,
            max: LUNAR_MAX_YEAR as i32,
        });
    }
    Ok(())
}

fn check_month(month: u8) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "lunar month {month} out of range [1, 12]"
        )));
    }
    Ok(())
}

/// Number of days of the regular lunar month `month` in `year`.
fn month_days(year: u16, month: u8) -> i32 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

/// Index of the leap month of `year`, or 0.
fn leap_month_of(year: u16) -> u8 {
    (info(year) & 0xf) as u8
}

fn leap_month_days(year: u16) -> i32 {
    if leap_month_of(year) == 0 {
        0
    } else if info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

fn year_days(year: u16) -> i32 {
    (1..=12).map(|m| month_days(year, m)).sum::<i32>() + leap_month_days(year)
}

/// Days from lunar 1900-01-01 to lunar `year`-01-01.
fn year_offset(year: u16) -> i32 {
    (LUNAR_MIN_YEAR..year).map(year_days).sum()
}

fn epoch() -> Result<Date> {
    Date::from_ymd(1900, 1, 31)
}

/// Leap month of lunar `year`, if it has one.
pub fn leap_month(year: u16) -> Result<Option<u8>> {
    check_year(year)?;
    Ok(match leap_month_of(year) {
        0 => None,
        m => Some(m),
    })
}

/// Gregorian date of the regular lunar date (`year`, `month`, `day`).
///
/// # Errors
/// `UnsupportedYear` outside 1900–2099; `InvalidArgument` for a month or day
/// the lunar year does not have.
pub fn lunar(year: u16, month: u8, day: u8) -> Result<Date> {
    check_year(year)?;
    check_month(month)?;
    let size = month_days(year, month);
    if day == 0 || day as i32 > size {
        return Err(Error::InvalidArgument(format!(
            "lunar {year}-{month}: day {day} out of range [1, {size}]"
        )));
    }
    let mut offset = year_offset(year);
    offset += (1..month).map(|m| month_days(year, m)).sum::<i32>();
    let leap = leap_month_of(year);
    if leap != 0 && leap < month {
        offset += leap_month_days(year);
    }
    epoch()?.add_days(offset + day as i32 - 1)
}

/// Gregorian date of a day in the intercalary month `month` of `year`.
///
/// # Errors
/// `InvalidArgument` if `year` has no leap month `month`.
pub fn lunar_leap(year: u16, month: u8, day: u8) -> Result<Date> {
    check_year(year)?;
    check_month(month)?;
    if leap_month_of(year) != month {
        return Err(Error::InvalidArgument(format!(
            "lunar year {year} has no leap month {month}"
        )));
    }
    let size = leap_month_days(year);
    if day == 0 || day as i32 > size {
        return Err(Error::InvalidArgument(format!(
            "lunar {year}-leap {month}: day {day} out of range [1, {size}]"
        )));
    }
    let offset = year_offset(year) + (1..=month).map(|m| month_days(year, m)).sum::<i32>();
    epoch()?.add_days(offset + day as i32 - 1)
}

/// Lunar new year's day of `year`.
pub fn new_year(year: u16) -> Result<Date> {
    lunar(year, 1, 1)
}

/// Convert a Gregorian date to the lunisolar calendar.
///
/// # Errors
/// `UnsupportedYear` for dates before lunar 1900-01-01 or after the end of
/// lunar 2099.
pub fn to_lunar(date: Date) -> Result<LunarDate> {
    let mut offset = epoch()?.days_between(date);
    let out_of_table = || Error::UnsupportedYear {
        calendar: "lunar",
        year: date.year() as i32,
        min: LUNAR_MIN_YEAR as i32,
        max: LUNAR_MAX_YEAR as i32,
    };
    if offset < 0 {
        return Err(out_of_table());
    }

    let mut year = LUNAR_MIN_YEAR;
    loop {
        let days = year_days(year);
        if offset < days {
            break;
        }
        offset -= days;
        if year == LUNAR_MAX_YEAR {
            return Err(out_of_table());
        }
        year += 1;
    }

    let leap = leap_month_of(year);
    for month in 1..=12u8 {
        let days = month_days(year, month);
        if offset < days {
            return Ok(LunarDate {
                year,
                month,
                day: (offset + 1) as u8,
                is_leap_month: false,
            });
        }
        offset -= days;
        if month == leap {
            let days = leap_month_days(year);
            if offset < days {
                return Ok(LunarDate {
                    year,
                    month,
                    day: (offset + 1) as u8,
                    is_leap_month: true,
                });
            }
            offset -= days;
        }
    }
    wk_core::fail!("lunar offset {offset} past the end of lunar year {year}")
}

// ── Holiday rule ──────────────────────────────────────────────────────────────

/// A holiday on a fixed lunar (month, day), optionally spanning the
/// neighbouring days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarHoliday {
    /// Lunar month (1–12).
    pub month: u8,
    /// Lunar day.
    pub day: u8,
    /// Display label, shared by the whole span.
    pub label: String,
    /// Extra days observed before the lunar date.
    #[cfg_attr(feature = "serde", serde(default))]
    pub days_before: u8,
    /// Extra days observed after the lunar date.
    #[cfg_attr(feature = "serde", serde(default))]
    pub days_after: u8,
}

impl LunarHoliday {
    /// A single-day lunar holiday.
    pub fn new(month: u8, day: u8, label: impl Into<String>) -> Self {
        Self {
            month,
            day,
            label: label.into(),
            days_before: 0,
            days_after: 0,
        }
    }

    /// Extend the holiday to `before` days before and `after` days after.
    pub fn with_span(mut self, before: u8, after: u8) -> Self {
        self.days_before = before;
        self.days_after = after;
        self
    }
}

/// Project lunar holidays onto a Gregorian year.
///
/// The lunar year with the same number as the Gregorian year is used; days
/// of a span that fall outside the Gregorian year are dropped.  Each span is
/// emitted as the lunar date itself, then the days before, then the days
/// after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarRules {
    holidays: Vec<LunarHoliday>,
}

impl LunarRules {
    /// Create the rule from its holidays.
    pub fn new(holidays: impl IntoIterator<Item = LunarHoliday>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// The configured holidays.
    pub fn entries(&self) -> &[LunarHoliday] {
        &self.holidays
    }
}

impl HolidayRule for LunarRules {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let mut days = Vec::new();
        for h in &self.holidays {
            let anchor = lunar(year, h.month, h.day)?;
            let before = (1..=h.days_before as i32).map(|k| -k);
            let after = 1..=h.days_after as i32;
            for offset in std::iter::once(0).chain(before).chain(after) {
                let date = anchor.add_days(offset)?;
                if date.year() == year {
                    days.push(Holiday::new(date, h.label.clone()));
                }
            }
        }
        Ok(days)
    }
}
