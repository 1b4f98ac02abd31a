//! March and September equinoxes as civil dates.
//!
//! Calendars that need the equinoxes hold an [`EquinoxOracle`] injected at
//! construction.  [`MeanEquinoxOracle`] is the built-in implementation: the
//! mean equinox polynomial corrected by 24 periodic terms, which is good to
//! a couple of minutes over 1900–2199.  The civil date in the requested
//! timezone comes from a [`UtcOffsetLookup`], by default the IANA database
//! compiled into `chrono-tz`.

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, WeekendDefinition};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::sync::Arc;
use wk_core::errors::{Error, Result};

/// Source of equinox dates.
pub trait EquinoxOracle: std::fmt::Debug + Send + Sync {
    /// Civil dates of the March (vernal) and September (autumnal) equinox of
    /// `year` in the IANA `timezone`, in that order.
    fn equinoxes(&self, year: u16, timezone: &str) -> Result<(Date, Date)>;
}

/// Resolves the UTC offset of an IANA timezone at an instant.
pub trait UtcOffsetLookup: std::fmt::Debug + Send + Sync {
    /// The offset in force in `timezone` at `instant`.
    fn utc_offset(&self, timezone: &str, instant: DateTime<Utc>) -> Result<FixedOffset>;
}

/// [`UtcOffsetLookup`] backed by the `chrono-tz` database.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl UtcOffsetLookup for TzDatabase {
    fn utc_offset(&self, timezone: &str, instant: DateTime<Utc>) -> Result<FixedOffset> {
        let tz = timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|e| Error::InvalidArgument(format!("unknown timezone {timezone:?}: {e}")))?;
        Ok(instant.with_timezone(&tz).offset().fix())
    }
}

// ── Astronomical model ────────────────────────────────────────────────────────

/// (amplitude, phase in degrees, rate in degrees per Julian century)
#[rustfmt::skip]
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136), (203.0, 337.23, 32964.467), (199.0, 342.08, 20.186),
    (182.0, 27.85, 445267.112), (156.0, 73.14, 45036.886), (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934), (74.0, 296.72, 3034.906), (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147), (52.0, 297.17, 150.678), (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562), (44.0, 325.15, 31555.956), (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328), (17.0, 288.79, 4562.452), (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921), (12.0, 95.39, 14577.848), (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259), (9.0, 227.73, 1222.114), (8.0, 15.45, 16859.074),
];

const J2000: f64 = 2_451_545.0;
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Season {
    March,
    September,
}

/// Julian Ephemeris Day of the equinox.
fn equinox_jde(year: u16, season: Season) -> f64 {
    let y = (year as f64 - 2000.0) / 1000.0;
    let (y2, y3, y4) = (y * y, y * y * y, y * y * y * y);
    let jde0 = match season {
        Season::March => {
            2_451_623.809_84 + 365_242.374_04 * y + 0.051_69 * y2 - 0.004_11 * y3 - 0.000_57 * y4
        }
        Season::September => {
            2_451_810.217_15 + 365_242.017_67 * y - 0.115_75 * y2 + 0.003_37 * y3 + 0.000_78 * y4
        }
    };
    let t = (jde0 - J2000) / 36_525.0;
    let w = (35_999.373 * t - 2.47).to_radians();
    let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|(a, b, c)| a * (b + c * t).to_radians().cos())
        .sum();
    jde0 + 0.000_01 * s / dl
}

/// TT − UT in seconds, long-term parabola.
fn delta_t(year: u16) -> f64 {
    let u = (year as f64 - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

fn to_utc(year: u16, season: Season) -> Result<DateTime<Utc>> {
    let jd = equinox_jde(year, season) - delta_t(year) / 86_400.0;
    let seconds = ((jd - UNIX_EPOCH_JD) * 86_400.0).round() as i64;
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| Error::Runtime(format!("equinox instant out of range for {year}")))
}

/// UTC instants of the March and September equinoxes of `year`.
///
/// # Errors
/// `UnsupportedYear` outside the supported Gregorian range.
pub fn equinox_instants(year: u16) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            calendar: "equinox",
            year: year as i32,
            min: MIN_YEAR as i32,
            max: MAX_YEAR as i32,
        });
    }
    Ok((to_utc(year, Season::March)?, to_utc(year, Season::September)?))
}

/// Built-in approximate [`EquinoxOracle`].
#[derive(Debug, Clone)]
pub struct MeanEquinoxOracle {
    lookup: Arc<dyn UtcOffsetLookup>,
}

impl MeanEquinoxOracle {
    /// Oracle using `lookup` to resolve timezones.
    pub fn new(lookup: Arc<dyn UtcOffsetLookup>) -> Self {
        Self { lookup }
    }

    fn civil_date(&self, instant: DateTime<Utc>, timezone: &str) -> Result<Date> {
        let offset = self.lookup.utc_offset(timezone, instant)?;
        Date::from_naive(instant.with_timezone(&offset).date_naive())
    }
}

impl Default for MeanEquinoxOracle {
    fn default() -> Self {
        Self::new(Arc::new(TzDatabase))
    }
}

impl EquinoxOracle for MeanEquinoxOracle {
    fn equinoxes(&self, year: u16, timezone: &str) -> Result<(Date, Date)> {
        let (march, september) = equinox_instants(year)?;
        Ok((
            self.civil_date(march, timezone)?,
            self.civil_date(september, timezone)?,
        ))
    }
}

// ── Holiday rule ──────────────────────────────────────────────────────────────

/// Emit the two equinoxes of a year as holidays.
#[derive(Debug, Clone)]
pub struct EquinoxRule {
    oracle: Arc<dyn EquinoxOracle>,
    timezone: String,
    vernal_label: String,
    autumnal_label: String,
}

impl EquinoxRule {
    /// Equinox days in `timezone`, as computed by `oracle`.
    pub fn new(
        oracle: Arc<dyn EquinoxOracle>,
        timezone: impl Into<String>,
        vernal_label: impl Into<String>,
        autumnal_label: impl Into<String>,
    ) -> Self {
        Self {
            oracle,
            timezone: timezone.into(),
            vernal_label: vernal_label.into(),
            autumnal_label: autumnal_label.into(),
        }
    }

    /// The IANA timezone the civil dates are taken in.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

impl HolidayRule for EquinoxRule {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let (vernal, autumnal) = self.oracle.equinoxes(year, &self.timezone)?;
        Ok(vec![
            Holiday::new(vernal, self.vernal_label.clone()),
            Holiday::new(autumnal, self.autumnal_label.clone()),
        ])
    }
}
