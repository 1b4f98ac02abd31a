//! France calendars.

use crate::calendar::RegionCalendar;
use crate::christian::ChristianRules;
use crate::rules::{RuleConfigurationBuilder, WeekendDefinition};
use wk_core::errors::Result;

/// France calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Easter Monday
/// * Labour Day (May 1)
/// * Victory in Europe Day (May 8)
/// * Ascension Thursday
/// * Whit Monday
/// * Bastille Day (Jul 14)
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Armistice Day (Nov 11)
/// * Christmas Day (Dec 25)
#[derive(Debug)]
pub struct France(RegionCalendar);

fn french_rules() -> ChristianRules {
    ChristianRules {
        include_easter_monday: true,
        include_ascension: true,
        include_whit_monday: true,
        include_all_saints: true,
        include_assumption: true,
        ..ChristianRules::default()
    }
}

fn french_base() -> RuleConfigurationBuilder {
    super::western()
        .with_fixed(5, 1, "Labour Day")
        .with_fixed(5, 8, "Victory in Europe Day")
        .with_fixed(7, 14, "Bastille Day")
        .with_fixed(11, 11, "Armistice Day")
}

impl France {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let config = french_base().with_christian(french_rules()).build()?;
        Ok(Self(RegionCalendar::new(
            "France",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(France);

/// France, Alsace and Moselle departments.
///
/// The national holidays plus Good Friday and Boxing Day (St Stephen's).
#[derive(Debug)]
pub struct FranceAlsaceMoselle(RegionCalendar);

impl FranceAlsaceMoselle {
    /// Create the calendar.
    pub fn new() -> Result<Self> {
        let rules = ChristianRules {
            include_good_friday: true,
            include_boxing_day: true,
            ..french_rules()
        };
        let config = french_base().with_christian(rules).build()?;
        Ok(Self(RegionCalendar::new(
            "France (Alsace-Moselle)",
            config,
            WeekendDefinition::SATURDAY_SUNDAY,
        )))
    }
}

delegate_calendar!(FranceAlsaceMoselle);
