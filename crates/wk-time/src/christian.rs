//! Easter computus and the Christian feast toggles.
//!
//! Easter Sunday is computed with Oudin's variant of the Gregorian computus;
//! every movable feast is a fixed offset from it.

use crate::date::Date;
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, WeekendDefinition};
use wk_core::errors::Result;

/// Easter Sunday of `year` (Gregorian computus).
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Maundy Thursday (Easter − 3).
pub fn holy_thursday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-3)
}

/// Good Friday (Easter − 2).
pub fn good_friday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-2)
}

/// Holy Saturday (Easter − 1).
pub fn easter_saturday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-1)
}

/// Easter Monday (Easter + 1).
pub fn easter_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(1)
}

/// Ascension Thursday (Easter + 39).
pub fn ascension_thursday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(39)
}

/// Whit Sunday / Pentecost (Easter + 49).
pub fn whit_sunday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(49)
}

/// Whit Monday (Easter + 50).
pub fn whit_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(50)
}

/// Corpus Christi (Easter + 60).
pub fn corpus_christi(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(60)
}

/// Which Christian holidays a calendar observes.
///
/// Days are emitted in field declaration order.  `include_christmas` is on
/// by default; everything else is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[allow(missing_docs)]
pub struct ChristianRules {
    pub include_epiphany: bool,
    pub include_holy_thursday: bool,
    pub include_good_friday: bool,
    pub include_easter_saturday: bool,
    pub include_easter_sunday: bool,
    pub include_easter_monday: bool,
    pub include_assumption: bool,
    pub include_all_saints: bool,
    pub include_immaculate_conception: bool,
    pub include_christmas: bool,
    pub include_christmas_eve: bool,
    pub include_boxing_day: bool,
    pub include_st_stephen: bool,
    pub include_ascension: bool,
    pub include_whit_sunday: bool,
    pub include_whit_monday: bool,
    pub include_corpus_christi: bool,
}

impl Default for ChristianRules {
    fn default() -> Self {
        Self {
            include_epiphany: false,
            include_holy_thursday: false,
            include_good_friday: false,
            include_easter_saturday: false,
            include_easter_sunday: false,
            include_easter_monday: false,
            include_assumption: false,
            include_all_saints: false,
            include_immaculate_conception: false,
            include_christmas: true,
            include_christmas_eve: false,
            include_boxing_day: false,
            include_st_stephen: false,
            include_ascension: false,
            include_whit_sunday: false,
            include_whit_monday: false,
            include_corpus_christi: false,
        }
    }
}

impl HolidayRule for ChristianRules {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let easter = easter_sunday(year)?;
        let on = |offset: i32, label: &str| -> Result<Holiday> {
            Ok(Holiday::new(easter.add_days(offset)?, label))
        };
        let fixed = |month: u8, day: u8, label: &str| -> Result<Holiday> {
            Ok(Holiday::new(Date::from_ymd(year, month, day)?, label))
        };

        let mut days = Vec::new();
        if self.include_epiphany {
            days.push(fixed(1, 6, "Epiphany")?);
        }
        if self.include_holy_thursday {
            days.push(on(-3, "Holy Thursday")?);
        }
        if self.include_good_friday {
            days.push(on(-2, "Good Friday")?);
        }
        if self.include_easter_saturday {
            days.push(on(-1, "Easter Saturday")?);
        }
        if self.include_easter_sunday {
            days.push(on(0, "Easter Sunday")?);
        }
        if self.include_easter_monday {
            days.push(on(1, "Easter Monday")?);
        }
        if self.include_assumption {
            days.push(fixed(8, 15, "Assumption of Mary to Heaven")?);
        }
        if self.include_all_saints {
            days.push(fixed(11, 1, "All Saints Day")?);
        }
        if self.include_immaculate_conception {
            days.push(fixed(12, 8, "Immaculate Conception")?);
        }
        if self.include_christmas {
            days.push(fixed(12, 25, "Christmas Day")?);
        }
        if self.include_christmas_eve {
            days.push(fixed(12, 24, "Christmas Eve")?);
        }
        if self.include_boxing_day {
            days.push(fixed(12, 26, "Boxing Day")?);
        }
        if self.include_st_stephen {
            days.push(fixed(12, 26, "St Stephen's Day")?);
        }
        if self.include_ascension {
            days.push(on(39, "Ascension Thursday")?);
        }
        if self.include_whit_sunday {
            days.push(on(49, "Whit Sunday")?);
        }
        if self.include_whit_monday {
            days.push(on(50, "Whit Monday")?);
        }
        if self.include_corpus_christi {
            days.push(on(60, "Corpus Christi")?);
        }
        Ok(days)
    }
}
