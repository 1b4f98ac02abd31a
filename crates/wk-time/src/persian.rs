//! Solar Hijri (Jalali) calendar.
//!
//! Leap years follow the 33-year arithmetic rule, overridden by a table of
//! years where the astronomical calendar disagrees with it.  The first six
//! months have 31 days, the next five 30, and Esfand 29 (30 in leap years).

use crate::date::Date;
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, WeekendDefinition};
use std::sync::OnceLock;
use wk_core::errors::{Error, Result};

/// First Jalali year lying wholly inside the supported Gregorian range.
pub const JALALI_MIN_YEAR: u16 = 1279;

/// Last Jalali year lying wholly inside the supported Gregorian range.
pub const JALALI_MAX_YEAR: u16 = 1577;

/// Years the 33-year rule marks as leap but which are not; the following
/// year is leap instead.
const NON_LEAP_CORRECTION: [u16; 2] = [1502, 1601];

// 1 Farvardin 1349 = 1970-03-21
const ANCHOR_YEAR: u16 = 1349;
const ANCHOR_JDN: i32 = 2_440_667;

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    /// Jalali year (SH).
    pub year: u16,
    /// Month (1–12), Farvardin = 1.
    pub month: u8,
    /// Day of month (1–31).
    pub day: u8,
}

/// Return `true` if Jalali `year` has 366 days.
pub fn is_jalali_leap_year(year: u16) -> bool {
    let first = NON_LEAP_CORRECTION[0];
    if year >= first && NON_LEAP_CORRECTION.contains(&year) {
        return false;
    }
    if year > first && NON_LEAP_CORRECTION.contains(&(year - 1)) {
        return true;
    }
    (25 * year as i32 + 11).rem_euclid(33) < 8
}

/// Number of days in Jalali `month` of `year`.
pub fn jalali_month_days(year: u16, month: u8) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_jalali_leap_year(year) => 30,
        _ => 29,
    }
}

/// Julian day numbers of Nowruz for every year from one before
/// [`JALALI_MIN_YEAR`] to one after [`JALALI_MAX_YEAR`].
fn nowruz_table() -> &'static [i32] {
    static TABLE: OnceLock<Vec<i32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let first = JALALI_MIN_YEAR - 1;
        let last = JALALI_MAX_YEAR + 1;
        let year_len = |y: u16| if is_jalali_leap_year(y) { 366 } else { 365 };
        let mut jdn = ANCHOR_JDN;
        for y in first..ANCHOR_YEAR {
            jdn -= year_len(y);
        }
        (first..=last)
            .map(|y| {
                let start = jdn;
                jdn += year_len(y);
                start
            })
            .collect()
    })
}

fn nowruz(year: u16) -> i32 {
    nowruz_table()[(year - (JALALI_MIN_YEAR - 1)) as usize]
}

/// Convert a Gregorian date to the Jalali calendar.
pub fn to_jalali(date: Date) -> JalaliDate {
    let jdn = date.julian_day();
    let mut year = date.year() - 621;
    if jdn < nowruz(year) {
        year -= 1;
    }
    let doy = jdn - nowruz(year);
    let (month, day) = if doy < 186 {
        (doy / 31 + 1, doy % 31 + 1)
    } else {
        let rest = doy - 186;
        (rest / 30 + 7, rest % 30 + 1)
    };
    JalaliDate {
        year,
        month: month as u8,
        day: day as u8,
    }
}

/// Gregorian date of the Jalali date (`year`, `month`, `day`).
///
/// # Errors
/// `UnsupportedYear` outside [`JALALI_MIN_YEAR`]..=[`JALALI_MAX_YEAR`];
/// `InvalidArgument` for a month or day the year does not have.
pub fn from_jalali(year: u16, month: u8, day: u8) -> Result<Date> {
    if !(JALALI_MIN_YEAR..=JALALI_MAX_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            calendar: "jalali",
            year: year as i32,
            min: JALALI_MIN_YEAR as i32,
            max: JALALI_MAX_YEAR as i32,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "jalali month {month} out of range [1, 12]"
        )));
    }
    let size = jalali_month_days(year, month);
    if day == 0 || day > size {
        return Err(Error::InvalidArgument(format!(
            "jalali {year}-{month}: day {day} out of range [1, {size}]"
        )));
    }
    let m = month as i32;
    let month_offset = if m <= 7 { 31 * (m - 1) } else { 186 + 30 * (m - 7) };
    Date::from_julian_day(nowruz(year) + month_offset + day as i32 - 1)
}

/// Every day of Gregorian `year` paired with its Jalali date, in order.
pub fn converted(year: u16) -> Result<Vec<(Date, JalaliDate)>> {
    let last = Date::from_ymd(year, 12, 31)?;
    let mut day = Date::from_ymd(year, 1, 1)?;
    let mut days = Vec::with_capacity(366);
    loop {
        days.push((day, to_jalali(day)));
        if day == last {
            return Ok(days);
        }
        day = day.succ()?;
    }
}

/// A holiday on a fixed Jalali (month, day).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalaliHoliday {
    /// Jalali month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Display label.
    pub label: String,
}

impl JalaliHoliday {
    /// Create the holiday.
    pub fn new(month: u8, day: u8, label: impl Into<String>) -> Self {
        Self {
            month,
            day,
            label: label.into(),
        }
    }
}

/// Project Jalali holidays onto a Gregorian year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalaliRules {
    holidays: Vec<JalaliHoliday>,
}

impl JalaliRules {
    /// Create the rule from its holidays.
    pub fn new(holidays: impl IntoIterator<Item = JalaliHoliday>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// The configured holidays.
    pub fn entries(&self) -> &[JalaliHoliday] {
        &self.holidays
    }
}

impl HolidayRule for JalaliRules {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        if self.holidays.is_empty() {
            return Ok(Vec::new());
        }
        let days = converted(year)?;
        let mut out = Vec::new();
        for h in &self.holidays {
            out.extend(
                days.iter()
                    .filter(|(_, j)| j.month == h.month && j.day == h.day)
                    .map(|(date, _)| Holiday::new(*date, h.label.clone())),
            );
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn jalali(year: u16, month: u8, day: u8) -> JalaliDate {
        JalaliDate { year, month, day }
    }

    #[test]
    fn nowruz_dates() {
        assert_eq!(from_jalali(1279, 1, 1).unwrap(), date(1900, 3, 21));
        assert_eq!(from_jalali(1349, 1, 1).unwrap(), date(1970, 3, 21));
        assert_eq!(from_jalali(1391, 1, 1).unwrap(), date(2012, 3, 20));
        assert_eq!(from_jalali(1392, 1, 1).unwrap(), date(2013, 3, 21));
        assert_eq!(from_jalali(1403, 1, 1).unwrap(), date(2024, 3, 20));
    }

    #[test]
    fn known_conversions() {
        assert_eq!(to_jalali(date(2013, 1, 1)), jalali(1391, 10, 12));
        assert_eq!(to_jalali(date(2013, 3, 20)), jalali(1391, 12, 30));
        assert_eq!(to_jalali(date(2013, 3, 21)), jalali(1392, 1, 1));
        assert_eq!(to_jalali(date(1970, 1, 1)), jalali(1348, 10, 11));
    }

    #[test]
    fn leap_years() {
        assert!(is_jalali_leap_year(1391));
        assert!(!is_jalali_leap_year(1392));
        assert!(is_jalali_leap_year(1403));
        // corrected by the table
        assert!(!is_jalali_leap_year(1502));
        assert!(is_jalali_leap_year(1503));
        assert_eq!(jalali_month_days(1391, 12), 30);
        assert_eq!(jalali_month_days(1392, 12), 29);
    }

    #[test]
    fn from_jalali_validates() {
        assert!(matches!(
            from_jalali(1578, 1, 1),
            Err(Error::UnsupportedYear { calendar: "jalali", .. })
        ));
        assert!(matches!(from_jalali(1392, 12, 30), Err(Error::InvalidArgument(_))));
        assert!(matches!(from_jalali(1392, 7, 31), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn converted_covers_every_day() {
        let days = converted(2013).unwrap();
        assert_eq!(days.len(), 365);
        assert!(days.windows(2).all(|w| w[0].0.days_between(w[1].0) == 1));
        assert_eq!(converted(2024).unwrap().len(), 366);
        // first and last supported Gregorian years
        assert_eq!(converted(1900).unwrap()[0].1, jalali(1278, 10, 11));
        assert_eq!(converted(2199).unwrap().len(), 365);
    }

    #[test]
    fn nowruz_rule() {
        let rules = JalaliRules::new([JalaliHoliday::new(1, 1, "Nowruz")]);
        let days = rules.holidays(2013, &WeekendDefinition::default()).unwrap();
        assert_eq!(days, vec![Holiday::new(date(2013, 3, 21), "Nowruz")]);
    }

    #[test]
    fn entries_and_rule_evaluation() {
        let rules = JalaliRules::new([
            JalaliHoliday::new(1, 1, "Nowruz"),
            JalaliHoliday::new(1, 13, "Nature Day"),
        ]);
        assert_eq!(rules.entries().len(), 2);
        assert_eq!(rules.entries()[1].day, 13);

        let days: Vec<Date> = rules
            .holidays(2013, &WeekendDefinition::default())
            .unwrap()
            .into_iter()
            .map(|h| h.date)
            .collect();
        assert_eq!(days, vec![date(2013, 3, 21), date(2013, 4, 2)]);
    }
}
