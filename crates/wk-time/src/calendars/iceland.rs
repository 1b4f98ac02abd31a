//! Iceland calendar.

use crate::calendar::RegionCalendar;
use crate::christian::ChristianRules;
use crate::date::{nth_weekday_in_month, Date};
use crate::holiday::Holiday;
use crate::rules::{FnRule, NthWeekdayRule, WeekendDefinition};
use crate::weekday::Weekday;
use wk_core::errors::Result;

/// Iceland calendar.
///
/// Besides the Easter cycle and Christmas days, Iceland observes the first
/// day of summer (first Thursday after April 18) and Commerce Day (first
/// Monday of August).
#[derive(Debug)]
pub struct Iceland(RegionCalendar);

/// First Thursday strictly after April 18.
pub fn first_day_of_summer(year: u16) -> Result<Option<Date>> {
    let start = Date::from_ymd(year, 4, 19)?;
    nth_weekday_in_month(year, 4, Weekday::Thursday, 1, Some(start))
}

impl Iceland {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let config = super::western()
            .with_fixed(5, 1, "Labour Day")
            .with_fixed(6, 17, "Icelandic National Day")
            .with_fixed(12, 31, "New Year's Eve")
            .with_christian(ChristianRules {
                include_holy_thursday: true,
                include_good_friday: true,
                include_easter_monday: true,
                include_ascension: true,
                include_whit_monday: true,
                include_christmas_eve: true,
                include_st_stephen: true,
                ..ChristianRules::default()
            })
            .with_rule(FnRule::new(
                "first day of summer",
                |year: u16, _: &WeekendDefinition| {
                    Ok(first_day_of_summer(year)?
                        .map(|d| Holiday::new(d, "First day of summer"))
                        .into_iter()
                        .collect())
                },
            ))
            .with_rule(NthWeekdayRule::new(8, Weekday::Monday, 1, "Commerce Day"))
            .build()?;
        Ok(Self(RegionCalendar::new(
            "Iceland",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(Iceland);
