//! United Kingdom calendar.

use crate::calendar::RegionCalendar;
use crate::christian::ChristianRules;
use crate::date::Date;
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, LastWeekdayRule, NthWeekdayRule, WeekendDefinition};
use crate::weekday::Weekday;
use wk_core::errors::Result;

/// United Kingdom calendar.
///
/// Holidays:
/// * New Year's Day (Jan 1; observed on the next weekday when on a weekend)
/// * Good Friday, Easter Sunday, Easter Monday
/// * Early May Bank Holiday (1st Mon in May)
/// * Spring Bank Holiday (last Mon in May)
/// * Late Summer Bank Holiday (last Mon in Aug)
/// * Christmas Day and Boxing Day, with substitute days when Christmas
///   falls on a weekend
#[derive(Debug)]
pub struct UnitedKingdom(RegionCalendar);

/// Substitute days for a Christmas on a weekend: the first weekday on or
/// after December 25 and the day after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChristmasShift;

impl HolidayRule for ChristmasShift {
    fn holidays(&self, year: u16, weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let christmas = Date::from_ymd(year, 12, 25)?;
        if !weekend.is_weekend(christmas) {
            return Ok(Vec::new());
        }
        let shift = weekend.following_non_weekend(christmas)?;
        Ok(vec![
            Holiday::new(shift, "Christmas Shift"),
            Holiday::new(shift.succ()?, "Boxing Day Shift"),
        ])
    }
}

impl UnitedKingdom {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let config = super::western()
            .shift_new_years_day(true)
            .with_christian(ChristianRules {
                include_good_friday: true,
                include_easter_sunday: true,
                include_easter_monday: true,
                include_boxing_day: true,
                ..ChristianRules::default()
            })
            .with_rule(NthWeekdayRule::new(5, Weekday::Monday, 1, "Early May Bank Holiday"))
            .with_rule(LastWeekdayRule::new(5, Weekday::Monday, "Spring Bank Holiday"))
            .with_rule(LastWeekdayRule::new(8, Weekday::Monday, "Late Summer Bank Holiday"))
            .with_rule(ChristmasShift)
            .build()?;
        Ok(Self(RegionCalendar::new(
            "United Kingdom",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(UnitedKingdom);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2013() {
        let cal = UnitedKingdom::new().unwrap();
        let dates: Vec<Date> = cal
            .holidays(Some(2013))
            .unwrap()
            .iter()
            .map(|h| h.date)
            .collect();
        assert_eq!(
            dates,
            vec![
                date(2013, 1, 1),
                date(2013, 3, 29),
                date(2013, 3, 31),
                date(2013, 4, 1),
                date(2013, 5, 6),
                date(2013, 5, 27),
                date(2013, 8, 26),
                date(2013, 12, 25),
                date(2013, 12, 26),
            ]
        );
    }

    #[test]
    fn christmas_on_saturday() {
        let cal = UnitedKingdom::new().unwrap();
        assert_eq!(
            cal.holiday_label(date(2010, 12, 27)).unwrap().as_deref(),
            Some("Christmas Shift")
        );
        assert_eq!(
            cal.holiday_label(date(2010, 12, 28)).unwrap().as_deref(),
            Some("Boxing Day Shift")
        );
    }

    #[test]
    fn christmas_on_sunday() {
        let cal = UnitedKingdom::new().unwrap();
        let holidays = cal.holidays_set(Some(2011)).unwrap();
        assert!(holidays.contains(&date(2011, 12, 26)));
        assert!(holidays.contains(&date(2011, 12, 27)));
        assert!(!holidays.contains(&date(2011, 12, 28)));
    }

    #[test]
    fn new_year_shift() {
        let cal = UnitedKingdom::new().unwrap();
        // 2011-01-01 is a Saturday
        assert_eq!(
            cal.holiday_label(date(2011, 1, 3)).unwrap().as_deref(),
            Some("New Year shift")
        );
        assert!(!cal.is_working_day(date(2011, 1, 3)).unwrap());
        assert!(cal.is_working_day(date(2011, 1, 4)).unwrap());
    }
}
