//! Holiday entries and the per-year holiday set.

use crate::date::{days_in_month, Date};
use std::collections::HashSet;
use wk_core::errors::{Error, Result};

/// A single labelled holiday.
///
/// Several holidays may fall on the same date (e.g. a fixed-table day and a
/// shifted observance); they are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: Date,
    /// Display label.
    pub label: String,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: Date, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.label)
    }
}

/// A holiday falling on the same (month, day) every Gregorian year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHoliday {
    /// Month (1–12).
    pub month: u8,
    /// Day of month (1–31).
    pub day: u8,
    /// Display label.
    pub label: String,
}

impl FixedHoliday {
    /// Create a fixed holiday, validating the (month, day) pair against a
    /// leap year so that February 29 is accepted.
    pub fn new(month: u8, day: u8, label: impl Into<String>) -> Result<Self> {
        let holiday = Self {
            month,
            day,
            label: label.into(),
        };
        holiday.validate()?;
        Ok(holiday)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidArgument(format!(
                "fixed holiday {:?}: month {} out of range [1, 12]",
                self.label, self.month
            )));
        }
        let max = days_in_month(2000, self.month);
        if self.day == 0 || self.day > max {
            return Err(Error::InvalidArgument(format!(
                "fixed holiday {:?}: day {} out of range [1, {max}]",
                self.label, self.day
            )));
        }
        Ok(())
    }

    /// Project onto `year`.
    ///
    /// Returns `Ok(None)` for February 29 in a non-leap year.
    pub fn in_year(&self, year: u16) -> Result<Option<Holiday>> {
        if self.day > days_in_month(year, self.month) {
            return Ok(None);
        }
        let date = Date::from_ymd(year, self.month, self.day)?;
        Ok(Some(Holiday::new(date, self.label.clone())))
    }
}

/// The holidays of one calendar year, sorted ascending by date.
///
/// Ties keep their generation order.  The distinct dates are indexed in a
/// membership set for the working-day test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: u16,
    entries: Vec<Holiday>,
    dates: HashSet<Date>,
}

impl HolidaySet {
    /// Build a set from entries in generation order.
    pub fn new(year: u16, mut entries: Vec<Holiday>) -> Self {
        // stable: equal dates keep generation order
        entries.sort_by_key(|h| h.date);
        let dates = entries.iter().map(|h| h.date).collect();
        Self {
            year,
            entries,
            dates,
        }
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The entries, sorted by date.
    pub fn entries(&self) -> &[Holiday] {
        &self.entries
    }

    /// Iterate over the entries in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.entries.iter()
    }

    /// Number of entries (not distinct dates).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The distinct holiday dates.
    pub fn dates(&self) -> &HashSet<Date> {
        &self.dates
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Label of the first entry on `date`.
    pub fn label(&self, date: Date) -> Option<&str> {
        self.entries
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.label.as_str())
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn sorted_and_stable() {
        let set = HolidaySet::new(
            2013,
            vec![
                Holiday::new(date(2013, 12, 25), "Christmas"),
                Holiday::new(date(2013, 1, 1), "New year"),
                Holiday::new(date(2013, 12, 25), "Christmas Day"),
            ],
        );
        let labels: Vec<_> = set.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, ["New year", "Christmas", "Christmas Day"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.dates().len(), 2);
        assert_eq!(set.label(date(2013, 12, 25)), Some("Christmas"));
    }

    #[test]
    fn fixed_holiday_validation() {
        assert!(FixedHoliday::new(2, 29, "Leap day").is_ok());
        assert!(FixedHoliday::new(2, 30, "Nope").is_err());
        assert!(FixedHoliday::new(13, 1, "Nope").is_err());
    }

    #[test]
    fn leap_day_skipped_in_common_years() {
        let leap = FixedHoliday::new(2, 29, "Leap day").unwrap();
        assert!(leap.in_year(2013).unwrap().is_none());
        assert_eq!(leap.in_year(2012).unwrap().unwrap().date, date(2012, 2, 29));
    }
}
