//! South Korea calendar.

use crate::calendar::RegionCalendar;
use crate::lunar::{LunarHoliday, LunarRules};
use crate::rules::{RuleConfiguration, WeekendDefinition};
use wk_core::errors::Result;

/// South Korea calendar.
///
/// The lunar holidays are Seollal (lunar new year, with the day before and
/// the day after), Buddha's Birthday (4th month, 8th day) and Chuseok (8th
/// month, 15th day, with the days either side).  The lunar table ends in
/// 2099, so later years fail with `UnsupportedYear`.
#[derive(Debug)]
pub struct SouthKorea(RegionCalendar);

impl SouthKorea {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let config = RuleConfiguration::builder()
            .with_fixed(1, 1, "New year")
            .with_fixed(3, 1, "Independence Day")
            .with_fixed(5, 5, "Children's Day")
            .with_fixed(6, 6, "Memorial Day")
            .with_fixed(8, 15, "Liberation Day")
            .with_fixed(10, 3, "National Foundation Day")
            .with_fixed(10, 9, "Hangul Day")
            .with_fixed(12, 25, "Christmas Day")
            .with_rule(LunarRules::new([
                LunarHoliday::new(1, 1, "Korean New Year's Day").with_span(1, 1),
                LunarHoliday::new(4, 8, "Buddha's Birthday"),
                LunarHoliday::new(8, 15, "Midautumn Festival").with_span(1, 1),
            ]))
            .build()?;
        Ok(Self(RegionCalendar::new(
            "South Korea",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(SouthKorea);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;
    use wk_core::errors::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2013() {
        let cal = SouthKorea::new().unwrap();
        let holidays = cal.holidays_set(Some(2013)).unwrap();
        for d in [
            date(2013, 1, 1),
            date(2013, 2, 9),
            date(2013, 2, 10),
            date(2013, 2, 11),
            date(2013, 3, 1),
            date(2013, 5, 5),
            date(2013, 5, 17),
            date(2013, 6, 6),
            date(2013, 8, 15),
            date(2013, 9, 18),
            date(2013, 9, 19),
            date(2013, 9, 20),
            date(2013, 10, 3),
            date(2013, 10, 9),
            date(2013, 12, 25),
        ] {
            assert!(holidays.contains(&d), "{d} should be a holiday");
        }
        assert_eq!(holidays.len(), 15);
    }

    #[test]
    fn lunar_days_2014() {
        let cal = SouthKorea::new().unwrap();
        for d in [
            date(2014, 1, 30),
            date(2014, 1, 31),
            date(2014, 2, 1),
            date(2014, 5, 6),
            date(2014, 9, 7),
            date(2014, 9, 8),
            date(2014, 9, 9),
        ] {
            assert!(cal.is_holiday(d).unwrap(), "{d} should be a holiday");
        }
    }

    #[test]
    fn beyond_the_lunar_table() {
        let cal = SouthKorea::new().unwrap();
        assert!(matches!(
            cal.holidays(Some(2100)),
            Err(Error::UnsupportedYear { .. })
        ));
        assert!(!cal.holiday_cache().contains_year(2100));
    }
}
