//! # wk-time
//!
//! Dates, holiday rules, calendar converters, and working-day arithmetic.
//!
//! A [`Calendar`] combines a fixed-date holiday table with variable-date
//! rules (Easter offsets, nth-weekday rules, lunar, Hijri and Jalali
//! festivals, astronomical equinoxes) and a weekend definition.  Region
//! calendars live in [`calendars`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait, per-year cache, and working-day arithmetic.
pub mod calendar;

/// Concrete region calendars.
pub mod calendars;

/// Easter computus and the Christian feast table.
pub mod christian;

/// `Date` type and Gregorian helpers.
pub mod date;

/// Equinox oracle and UTC-offset lookup.
pub mod equinox;

/// Holiday entries and per-year holiday sets.
pub mod holiday;

/// Tabular Hijri calendar and Islamic holidays.
pub mod islamic;

/// Chinese lunisolar calendar (1900–2099).
pub mod lunar;

/// Jalali (Persian solar hijri) calendar.
pub mod persian;

/// Weekend definitions, holiday rules, and rule configurations.
pub mod rules;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, RegionCalendar, WorkingDayExceptions, YearCache};
pub use christian::{easter_sunday, ChristianRules};
pub use date::{last_weekday_in_month, nth_weekday_in_month, Date};
pub use equinox::{EquinoxOracle, EquinoxRule, MeanEquinoxOracle, TzDatabase, UtcOffsetLookup};
pub use holiday::{FixedHoliday, Holiday, HolidaySet};
pub use islamic::{HijriDate, HijriHoliday, IslamicRules};
pub use lunar::{LunarDate, LunarHoliday, LunarRules};
pub use persian::{JalaliDate, JalaliHoliday, JalaliRules};
pub use rules::{
    FnRule, HolidayRule, LastWeekdayRule, NthWeekdayRule, RuleConfiguration,
    RuleConfigurationBuilder, WeekendDefinition,
};
pub use weekday::Weekday;
