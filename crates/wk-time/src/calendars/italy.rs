//! Italy calendar.

use crate::calendar::RegionCalendar;
use crate::christian::ChristianRules;
use crate::rules::WeekendDefinition;
use wk_core::errors::Result;

/// Italy calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Easter Monday
/// * Liberation Day (Apr 25)
/// * International Workers' Day (May 1)
/// * Republic Day (Jun 2)
/// * Assumption (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25)
/// * St Stephen's Day (Dec 26)
#[derive(Debug)]
pub struct Italy(RegionCalendar);

impl Italy {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let config = super::western()
            .with_fixed(4, 25, "Liberation Day")
            .with_fixed(5, 1, "International Workers' Day")
            .with_fixed(6, 2, "Republic Day")
            .with_christian(ChristianRules {
                include_epiphany: true,
                include_easter_monday: true,
                include_assumption: true,
                include_all_saints: true,
                include_immaculate_conception: true,
                include_st_stephen: true,
                ..ChristianRules::default()
            })
            .build()?;
        Ok(Self(RegionCalendar::new(
            "Italy",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(Italy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2013() {
        let cal = Italy::new().unwrap();
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
                date(2013, 1, 6),
                date(2013, 4, 1),
                date(2013, 4, 25),
                date(2013, 5, 1),
                date(2013, 6, 2),
                date(2013, 8, 15),
                date(2013, 11, 1),
                date(2013, 12, 8),
                date(2013, 12, 25),
                date(2013, 12, 26),
            ]
        );
    }

    #[test]
    fn liberation_day_is_not_working() {
        let cal = Italy::new().unwrap();
        // Thursday
        assert!(!cal.is_working_day(date(2013, 4, 25)).unwrap());
        assert!(cal.is_working_day(date(2013, 4, 26)).unwrap());
    }
}
