//! Czech Republic calendar.

use crate::calendar::RegionCalendar;
use crate::christian::ChristianRules;
use crate::rules::WeekendDefinition;
use wk_core::errors::Result;

/// Czech Republic calendar.
///
/// January 1 carries both New Year's Day and the Restoration Day of the
/// Independent Czech State; both entries are kept.
#[derive(Debug)]
pub struct CzechRepublic(RegionCalendar);

impl CzechRepublic {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let config = super::western()
            .with_fixed(1, 1, "Restoration Day of the Independent Czech State")
            .with_fixed(5, 1, "Labour Day")
            .with_fixed(5, 8, "Liberation Day")
            .with_fixed(7, 5, "Saints Cyril and Methodius Day")
            .with_fixed(7, 6, "Jan Hus Day")
            .with_fixed(9, 28, "St. Wenceslas Day (Czech Statehood Day)")
            .with_fixed(10, 28, "Independent Czechoslovak State Day")
            .with_fixed(11, 17, "Struggle for Freedom and Democracy Day")
            .with_fixed(12, 24, "Christmas Eve")
            .with_fixed(12, 26, "St. Stephen's Day (The Second Christmas Day)")
            .with_christian(ChristianRules {
                include_easter_monday: true,
                ..ChristianRules::default()
            })
            .build()?;
        Ok(Self(RegionCalendar::new(
            "Czech Republic",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(CzechRepublic);
