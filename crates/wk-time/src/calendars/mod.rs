//! Region calendars.
//!
//! Each region is a thin newtype over [`RegionCalendar`](crate::calendar::RegionCalendar)
//! whose constructor assembles the region's rule configuration.

/// Forward the [`Calendar`](crate::calendar::Calendar) hooks of a newtype
/// to the wrapped `RegionCalendar`.
macro_rules! delegate_calendar {
    ($ty:ty) => {
        impl $crate::calendar::Calendar for $ty {
            fn name(&self) -> &str {
                $crate::calendar::Calendar::name(&self.0)
            }

            fn holiday_cache(&self) -> &$crate::calendar::YearCache {
                $crate::calendar::Calendar::holiday_cache(&self.0)
            }

            fn fixed_holidays(&self) -> &[$crate::holiday::FixedHoliday] {
                $crate::calendar::Calendar::fixed_holidays(&self.0)
            }

            fn variable_days(
                &self,
                year: u16,
            ) -> wk_core::errors::Result<Vec<$crate::holiday::Holiday>> {
                $crate::calendar::Calendar::variable_days(&self.0, year)
            }

            fn weekend_days(&self) -> wk_core::errors::Result<$crate::rules::WeekendDefinition> {
                $crate::calendar::Calendar::weekend_days(&self.0)
            }
        }
    };
}

pub mod czech_republic;
pub mod france;
pub mod iceland;
pub mod italy;
pub mod japan;
pub mod south_korea;
pub mod united_kingdom;

pub use czech_republic::CzechRepublic;
pub use france::{France, FranceAlsaceMoselle};
pub use iceland::Iceland;
pub use italy::Italy;
pub use japan::Japan;
pub use south_korea::SouthKorea;
pub use united_kingdom::UnitedKingdom;

use crate::rules::{RuleConfiguration, RuleConfigurationBuilder};

/// Builder preloaded with the western base: New Year's Day on January 1.
/// Christian feasts, Christmas included, are added by each region through
/// `with_christian`.
pub(crate) fn western() -> RuleConfigurationBuilder {
    RuleConfiguration::builder().with_fixed(1, 1, "New year")
}
