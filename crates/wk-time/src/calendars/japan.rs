//! Japan calendar.

use crate::calendar::RegionCalendar;
use crate::equinox::{EquinoxOracle, EquinoxRule, MeanEquinoxOracle};
use crate::rules::{NthWeekdayRule, WeekendDefinition};
use crate::weekday::Weekday;
use std::sync::Arc;
use wk_core::errors::Result;

/// Timezone the equinox days are observed in.
pub const TIMEZONE: &str = "Asia/Tokyo";

/// Japan calendar.
///
/// Holidays:
/// * New Year's Day (Jan 1)
/// * Coming of Age Day (2nd Mon in Jan)
/// * Foundation Day (Feb 11)
/// * Vernal Equinox Day
/// * Shōwa Day (Apr 29)
/// * Constitution Memorial Day, Greenery Day, Children's Day (May 3–5)
/// * Marine Day (3rd Mon in Jul)
/// * Respect-for-the-Aged Day (3rd Mon in Sep)
/// * Autumnal Equinox Day
/// * Health and Sports Day (2nd Mon in Oct)
/// * Culture Day (Nov 3)
/// * Labour Thanksgiving Day (Nov 23)
/// * The Emperor's Birthday (Dec 23)
///
/// The equinox days are taken from an [`EquinoxOracle`] in Tokyo time.
#[derive(Debug)]
pub struct Japan(RegionCalendar);

impl Japan {
    /// Create the calendar with the built-in [`MeanEquinoxOracle`].
    pub fn new() -> Result<Self> {
        Self::with_oracle(Arc::new(MeanEquinoxOracle::default()))
    }

    /// Create the calendar with equinox dates from `oracle`.
    pub fn with_oracle(oracle: Arc<dyn EquinoxOracle>) -> Result<Self> {
        let config = super::western()
            .with_fixed(2, 11, "Foundation Day")
            .with_fixed(4, 29, "Shōwa Day")
            .with_fixed(5, 3, "Constitution Memorial Day")
            .with_fixed(5, 4, "Greenery Day")
            .with_fixed(5, 5, "Children's Day")
            .with_fixed(11, 3, "Culture Day")
            .with_fixed(11, 23, "Labour Thanksgiving Day")
            .with_fixed(12, 23, "The Emperor's Birthday")
            .with_rule(NthWeekdayRule::new(1, Weekday::Monday, 2, "Coming of Age Day"))
            .with_rule(NthWeekdayRule::new(7, Weekday::Monday, 3, "Marine Day"))
            .with_rule(EquinoxRule::new(
                oracle,
                TIMEZONE,
                "Vernal Equinox Day",
                "Autumnal Equinox Day",
            ))
            .with_rule(NthWeekdayRule::new(9, Weekday::Monday, 3, "Respect-for-the-Aged Day"))
            .with_rule(NthWeekdayRule::new(10, Weekday::Monday, 2, "Health and Sports Day"))
            .build()?;
        Ok(Self(RegionCalendar::new(
            "Japan",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(Japan);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Oracle pinning the equinoxes to March 1 and September 1.
    #[derive(Debug)]
    struct FixedOracle;

    impl EquinoxOracle for FixedOracle {
        fn equinoxes(&self, year: u16, timezone: &str) -> Result<(Date, Date)> {
            assert_eq!(timezone, TIMEZONE);
            Ok((Date::from_ymd(year, 3, 1)?, Date::from_ymd(year, 9, 1)?))
        }
    }

    #[test]
    fn injected_oracle() {
        let cal = Japan::with_oracle(Arc::new(FixedOracle)).unwrap();
        assert_eq!(
            cal.holiday_label(date(2013, 3, 1)).unwrap().as_deref(),
            Some("Vernal Equinox Day")
        );
        assert_eq!(
            cal.holiday_label(date(2013, 9, 1)).unwrap().as_deref(),
            Some("Autumnal Equinox Day")
        );
        assert!(!cal.is_holiday(date(2013, 9, 23)).unwrap());
    }

    #[test]
    fn holidays_2013() {
        let cal = Japan::new().unwrap();
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
                date(2013, 1, 14),
                date(2013, 2, 11),
                date(2013, 3, 20),
                date(2013, 4, 29),
                date(2013, 5, 3),
                date(2013, 5, 4),
                date(2013, 5, 5),
                date(2013, 7, 15),
                date(2013, 9, 16),
                date(2013, 9, 23),
                date(2013, 10, 14),
                date(2013, 11, 3),
                date(2013, 11, 23),
                date(2013, 12, 23),
            ]
        );
    }
}
