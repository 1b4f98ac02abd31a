//! Arithmetic (tabular civil) Hijri calendar.
//!
//! Odd months have 30 days and even months 29, except month 12 which has 30
//! days in the 11 leap years of each 30-year cycle.  Conversion goes through
//! Julian day numbers; day 1 of the era is JDN 1948440 (July 16, 622 Julian).

use crate::date::Date;
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, WeekendDefinition};
use wk_core::errors::{Error, Result};

const HIJRI_EPOCH: i32 = 1_948_440;

/// First Hijri year lying wholly inside the supported Gregorian range.
pub const HIJRI_MIN_YEAR: u16 = 1318;

/// Last Hijri year lying wholly inside the supported Gregorian range.
pub const HIJRI_MAX_YEAR: u16 = 1625;

/// A date in the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    /// Hijri year (AH).
    pub year: u16,
    /// Month (1–12), Muharram = 1.
    pub month: u8,
    /// Day of month (1–30).
    pub day: u8,
}

/// Return `true` if Hijri `year` has a 30-day Dhu al-Hijjah.
pub fn is_hijri_leap_year(year: u16) -> bool {
    (14 + 11 * year as i32) % 30 < 11
}

/// Number of days in Hijri `month` of `year`.
pub fn hijri_month_days(year: u16, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_hijri_leap_year(year)) {
        30
    } else {
        29
    }
}

fn julian_day(year: i32, month: i32, day: i32) -> i32 {
    day + (59 * (month - 1) + 1) / 2 + (year - 1) * 354 + (3 + 11 * year) / 30 + HIJRI_EPOCH - 1
}

/// Convert a Gregorian date to the Hijri calendar.
pub fn to_hijri(date: Date) -> HijriDate {
    let jdn = date.julian_day();
    let year = (30 * (jdn - HIJRI_EPOCH) + 10646) / 10631;
    // months alternate 30/29 days, i.e. 29.5 on average
    let x = 2 * (jdn - 29 - julian_day(year, 1, 1));
    let month = (-((-x).div_euclid(59)) + 1).min(12);
    let day = jdn - julian_day(year, month, 1) + 1;
    HijriDate {
        year: year as u16,
        month: month as u8,
        day: day as u8,
    }
}

/// Gregorian date of the Hijri date (`year`, `month`, `day`).
///
/// # Errors
/// `UnsupportedYear` outside [`HIJRI_MIN_YEAR`]..=[`HIJRI_MAX_YEAR`];
/// `InvalidArgument` for a month or day the year does not have.
pub fn from_hijri(year: u16, month: u8, day: u8) -> Result<Date> {
    if !(HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            calendar: "hijri",
            year: year as i32,
            min: HIJRI_MIN_YEAR as i32,
            max: HIJRI_MAX_YEAR as i32,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "hijri month {month} out of range [1, 12]"
        )));
    }
    let size = hijri_month_days(year, month);
    if day == 0 || day > size {
        return Err(Error::InvalidArgument(format!(
            "hijri {year}-{month}: day {day} out of range [1, {size}]"
        )));
    }
    Date::from_julian_day(julian_day(year as i32, month as i32, day as i32))
}

/// Every day of Gregorian `year` paired with its Hijri date, in order.
pub fn converted(year: u16) -> Result<Vec<(Date, HijriDate)>> {
    let first = Date::from_ymd(year, 1, 1)?;
    let last = Date::from_ymd(year, 12, 31)?;
    let mut days = Vec::with_capacity(366);
    let mut day = first;
    loop {
        days.push((day, to_hijri(day)));
        if day == last {
            return Ok(days);
        }
        day = day.succ()?;
    }
}

// ── Holiday rule ──────────────────────────────────────────────────────────────

/// A holiday on a fixed Hijri (month, day).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriHoliday {
    /// Hijri month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Display label.
    pub label: String,
}

impl HijriHoliday {
    /// Create the holiday.
    pub fn new(month: u8, day: u8, label: impl Into<String>) -> Self {
        Self {
            month,
            day,
            label: label.into(),
        }
    }
}

/// The Islamic holidays a calendar observes.
///
/// The Hijri year is about eleven days shorter than the Gregorian one, so
/// a holiday can fall zero, one or two times in a Gregorian year; every
/// occurrence is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[allow(missing_docs)]
pub struct IslamicRules {
    pub include_islamic_new_year: bool,
    pub include_ashura: bool,
    pub include_prophet_birthday: bool,
    pub include_day_after_prophet_birthday: bool,
    pub include_start_ramadan: bool,
    pub include_laylat_al_qadr: bool,
    pub include_eid_al_fitr: bool,
    /// Days of Eid al-Fitr, starting on 1 Shawwal.
    pub length_eid_al_fitr: u8,
    pub include_day_of_arafah: bool,
    pub include_eid_al_adha: bool,
    /// Days of Eid al-Adha, starting on 10 Dhu al-Hijjah.
    pub length_eid_al_adha: u8,
    /// Additional regional days.
    pub extra_days: Vec<HijriHoliday>,
}

impl Default for IslamicRules {
    fn default() -> Self {
        Self {
            include_islamic_new_year: false,
            include_ashura: false,
            include_prophet_birthday: false,
            include_day_after_prophet_birthday: false,
            include_start_ramadan: false,
            include_laylat_al_qadr: false,
            include_eid_al_fitr: false,
            length_eid_al_fitr: 1,
            include_day_of_arafah: false,
            include_eid_al_adha: false,
            length_eid_al_adha: 1,
            extra_days: Vec::new(),
        }
    }
}

impl IslamicRules {
    /// The (month, day, label) table selected by the toggles.
    ///
    /// Each Eid appears once, on its first day; see [`IslamicRules::spans`]
    /// for the number of days it lasts.
    pub fn hijri_holidays(&self) -> Vec<HijriHoliday> {
        self.spans().into_iter().map(|(h, _)| h).collect()
    }

    /// The selected holidays with the number of consecutive days each lasts.
    ///
    /// An Eid with a length of zero is left out.
    pub fn spans(&self) -> Vec<(HijriHoliday, u8)> {
        let mut days = Vec::new();
        if self.include_islamic_new_year {
            days.push((HijriHoliday::new(1, 1, "Islamic New Year"), 1));
        }
        if self.include_ashura {
            days.push((HijriHoliday::new(1, 10, "Ashura"), 1));
        }
        if self.include_prophet_birthday {
            days.push((HijriHoliday::new(3, 12, "Prophet's Birthday"), 1));
        }
        if self.include_day_after_prophet_birthday {
            days.push((HijriHoliday::new(3, 13, "Day after Prophet's Birthday"), 1));
        }
        if self.include_start_ramadan {
            days.push((HijriHoliday::new(9, 1, "Start of ramadan"), 1));
        }
        if self.include_laylat_al_qadr {
            days.push((HijriHoliday::new(9, 27, "Laylat al-Qadr"), 1));
        }
        if self.include_eid_al_fitr && self.length_eid_al_fitr > 0 {
            days.push((HijriHoliday::new(10, 1, "Eid al-Fitr"), self.length_eid_al_fitr));
        }
        if self.include_day_of_arafah {
            days.push((HijriHoliday::new(12, 9, "Day of Arafah"), 1));
        }
        if self.include_eid_al_adha && self.length_eid_al_adha > 0 {
            days.push((HijriHoliday::new(12, 10, "Eid al-Adha"), self.length_eid_al_adha));
        }
        days.extend(self.extra_days.iter().cloned().map(|h| (h, 1)));
        days
    }
}

impl HolidayRule for IslamicRules {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let table = self.spans();
        let Some(longest) = table.iter().map(|(_, length)| *length).max() else {
            return Ok(Vec::new());
        };
        // a span starting up to `longest - 1` days before January 1 still
        // reaches into the year
        let last = Date::from_ymd(year, 12, 31)?;
        let mut day = Date::from_ymd(year, 1, 1)?
            .add_days(1 - i32::from(longest))
            .unwrap_or(Date::MIN);
        let mut window = Vec::with_capacity(366 + usize::from(longest));
        loop {
            window.push((day, to_hijri(day)));
            if day == last {
                break;
            }
            day = day.succ()?;
        }

        let mut out = Vec::new();
        for (h, length) in &table {
            let anchors = window
                .iter()
                .filter(|(_, hijri)| hijri.month == h.month && hijri.day == h.day);
            for (anchor, _) in anchors {
                for k in 0..*length {
                    // past the last supported date, hence past the year
                    let Ok(date) = anchor.add_days(i32::from(k)) else {
                        break;
                    };
                    if date.year() == year {
                        out.push(Holiday::new(date, h.label.clone()));
                    }
                }
            }
        }
        Ok(out)
    }
}
