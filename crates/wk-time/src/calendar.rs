//! `Calendar` trait, the per-year holiday cache, and [`RegionCalendar`].
//!
//! A calendar supplies a name, a fixed-date holiday table, a generator of
//! variable-date holidays and a weekend definition.  Everything else
//! (holiday lookup, working-day tests and arithmetic) is provided by the
//! trait on top of a [`YearCache`] the calendar owns.

use crate::date::Date;
use crate::holiday::{FixedHoliday, Holiday, HolidaySet};
use crate::rules::{RuleConfiguration, WeekendDefinition};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use wk_core::errors::{Error, Result};

pub use crate::date::{last_weekday_in_month, nth_weekday_in_month};

// ── Year cache ────────────────────────────────────────────────────────────────

/// Memoized holiday sets, one per year.
///
/// A year is computed at most once per cache and never evicted.  Readers
/// get the same `Arc` back on every call.  Computation happens outside the
/// lock; if two threads race on the same year the first insert wins and
/// both observe it.
#[derive(Default)]
pub struct YearCache {
    years: RwLock<HashMap<u16, Arc<HolidaySet>>>,
}

impl YearCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached set for `year`, if any.
    pub fn get(&self, year: u16) -> Option<Arc<HolidaySet>> {
        self.years.read().get(&year).cloned()
    }

    /// Commit `set` for `year` unless another set was committed first, and
    /// return the one that is now cached.
    pub fn insert(&self, year: u16, set: HolidaySet) -> Arc<HolidaySet> {
        let mut years = self.years.write();
        Arc::clone(years.entry(year).or_insert_with(|| Arc::new(set)))
    }

    /// Return `true` if `year` has been computed.
    pub fn contains_year(&self, year: u16) -> bool {
        self.years.read().contains_key(&year)
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.years.read().len()
    }

    /// Return `true` if nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.years.read().is_empty()
    }
}

impl std::fmt::Debug for YearCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut years: Vec<u16> = self.years.read().keys().copied().collect();
        years.sort_unstable();
        f.debug_struct("YearCache").field("years", &years).finish()
    }
}

// ── Exceptions ────────────────────────────────────────────────────────────────

/// Per-call overrides for the working-day test.
///
/// `extra_working_days` beats everything, including weekends;
/// `extra_holidays` turns otherwise working days into non-working ones.
/// Neither set touches the calendar's cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingDayExceptions {
    extra_working_days: HashSet<Date>,
    extra_holidays: HashSet<Date>,
}

impl WorkingDayExceptions {
    /// No exceptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `day` as a working day.
    pub fn with_extra_working_day(mut self, day: Date) -> Self {
        self.extra_working_days.insert(day);
        self
    }

    /// Treat every date in `days` as a working day.
    pub fn with_extra_working_days(mut self, days: impl IntoIterator<Item = Date>) -> Self {
        self.extra_working_days.extend(days);
        self
    }

    /// Treat `day` as a holiday.
    pub fn with_extra_holiday(mut self, day: Date) -> Self {
        self.extra_holidays.insert(day);
        self
    }

    /// Treat every date in `days` as a holiday.
    pub fn with_extra_holidays(mut self, days: impl IntoIterator<Item = Date>) -> Self {
        self.extra_holidays.extend(days);
        self
    }

    /// Dates forced to be working days.
    pub fn extra_working_days(&self) -> &HashSet<Date> {
        &self.extra_working_days
    }

    /// Dates forced to be holidays.
    pub fn extra_holidays(&self) -> &HashSet<Date> {
        &self.extra_holidays
    }

    /// Return `true` if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.extra_working_days.is_empty() && self.extra_holidays.is_empty()
    }
}

// ── Calendar trait ────────────────────────────────────────────────────────────

/// A holiday calendar.
///
/// Implementors provide [`name`](Calendar::name) and
/// [`holiday_cache`](Calendar::holiday_cache), and override
/// [`fixed_holidays`](Calendar::fixed_holidays),
/// [`variable_days`](Calendar::variable_days) and
/// [`weekend_days`](Calendar::weekend_days) as needed.  A calendar that
/// keeps the default `weekend_days` can list holidays but cannot answer
/// working-day questions.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"France"`).
    fn name(&self) -> &str;

    /// The cache backing [`holidays`](Calendar::holidays).
    fn holiday_cache(&self) -> &YearCache;

    /// Holidays falling on the same (month, day) every year, in table order.
    fn fixed_holidays(&self) -> &[FixedHoliday] {
        &[]
    }

    /// Holidays whose date has to be computed for `year`.
    fn variable_days(&self, _year: u16) -> Result<Vec<Holiday>> {
        Ok(Vec::new())
    }

    /// The non-working weekdays.
    ///
    /// # Errors
    /// `UnsupportedOperation` unless overridden.
    fn weekend_days(&self) -> Result<WeekendDefinition> {
        Err(Error::UnsupportedOperation(format!(
            "calendar {:?} does not define weekend days",
            self.name()
        )))
    }

    /// Holidays of `year` (the current year for `None`), sorted by date.
    ///
    /// Computed on first use and cached; later calls return the same `Arc`.
    /// A failed computation caches nothing.
    fn holidays(&self, year: Option<u16>) -> Result<Arc<HolidaySet>> {
        let year = match year {
            Some(year) => year,
            None => Date::today()?.year(),
        };
        let cache = self.holiday_cache();
        if let Some(set) = cache.get(year) {
            tracing::trace!(calendar = self.name(), year, "holiday cache hit");
            return Ok(set);
        }
        let set = match compute_holidays(self, year) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(calendar = self.name(), year, error = %e, "holiday computation failed");
                return Err(e);
            }
        };
        tracing::debug!(
            calendar = self.name(),
            year,
            entries = set.len(),
            "computed holidays"
        );
        Ok(cache.insert(year, set))
    }

    /// Distinct holiday dates of `year` (the current year for `None`).
    fn holidays_set(&self, year: Option<u16>) -> Result<HashSet<Date>> {
        Ok(self.holidays(year)?.dates().clone())
    }

    /// Return `true` if `day` is a holiday of this calendar.
    fn is_holiday(&self, day: Date) -> Result<bool> {
        Ok(self.holidays(Some(day.year()))?.contains(day))
    }

    /// Like [`is_holiday`](Calendar::is_holiday), also counting the extra
    /// holidays of `exceptions`.
    fn is_holiday_with(&self, day: Date, exceptions: &WorkingDayExceptions) -> Result<bool> {
        if exceptions.extra_holidays.contains(&day) {
            return Ok(true);
        }
        self.is_holiday(day)
    }

    /// Label of the first holiday on `day`.
    fn holiday_label(&self, day: Date) -> Result<Option<String>> {
        Ok(self
            .holidays(Some(day.year()))?
            .label(day)
            .map(str::to_owned))
    }

    /// Return `true` if `day` is neither a weekend day nor a holiday.
    fn is_working_day(&self, day: Date) -> Result<bool> {
        self.is_working_day_with(day, &WorkingDayExceptions::default())
    }

    /// Working-day test with per-call overrides.
    ///
    /// Decision order: extra working day, weekend, extra holiday, holiday.
    fn is_working_day_with(&self, day: Date, exceptions: &WorkingDayExceptions) -> Result<bool> {
        let weekend = self.weekend_days()?;
        if exceptions.extra_working_days.contains(&day) {
            return Ok(true);
        }
        if weekend.is_weekend(day) {
            return Ok(false);
        }
        if exceptions.extra_holidays.contains(&day) {
            return Ok(false);
        }
        Ok(!self.is_holiday(day)?)
    }

    /// The `n`-th working day after `start`.
    fn add_working_days(&self, start: Date, n: i32) -> Result<Date> {
        self.add_working_days_with(start, n, &WorkingDayExceptions::default())
    }

    /// The `n`-th working day after `start`, with per-call overrides.
    ///
    /// `n == 0` returns `start` as is, working day or not.
    ///
    /// # Errors
    /// `InvalidArgument` for a negative `n`; use
    /// [`sub_working_days`](Calendar::sub_working_days) to go backward.
    fn add_working_days_with(
        &self,
        start: Date,
        n: i32,
        exceptions: &WorkingDayExceptions,
    ) -> Result<Date> {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "add_working_days: n must be non-negative, got {n}"
            )));
        }
        let mut day = start;
        let mut remaining = n;
        while remaining > 0 {
            day = day.succ()?;
            if self.is_working_day_with(day, exceptions)? {
                remaining -= 1;
            }
        }
        Ok(day)
    }

    /// The `n`-th working day before `start`.
    fn sub_working_days(&self, start: Date, n: i32) -> Result<Date> {
        self.sub_working_days_with(start, n, &WorkingDayExceptions::default())
    }

    /// The `n`-th working day before `start`, with per-call overrides.
    fn sub_working_days_with(
        &self,
        start: Date,
        n: i32,
        exceptions: &WorkingDayExceptions,
    ) -> Result<Date> {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "sub_working_days: n must be non-negative, got {n}"
            )));
        }
        let mut day = start;
        let mut remaining = n;
        while remaining > 0 {
            day = day.pred()?;
            if self.is_working_day_with(day, exceptions)? {
                remaining -= 1;
            }
        }
        Ok(day)
    }

    /// Count the working days between `start` (exclusive) and `end`
    /// (inclusive).  Negative if `end < start`.
    fn working_days_between(&self, start: Date, end: Date) -> Result<i32> {
        if start == end {
            return Ok(0);
        }
        let (sign, from, to) = if end > start {
            (1, start, end)
        } else {
            (-1, end, start)
        };
        let mut count = 0;
        let mut day = from;
        while day < to {
            day = day.succ()?;
            if self.is_working_day(day)? {
                count += 1;
            }
        }
        Ok(sign * count)
    }

    /// First day on or after `day` that is not a weekend day.  Holidays are
    /// not considered.
    fn find_following_working_day(&self, day: Date) -> Result<Date> {
        self.weekend_days()?.following_non_weekend(day)
    }
}

/// Fixed table projected on `year`, then the variable days, sorted.
fn compute_holidays<C: Calendar + ?Sized>(calendar: &C, year: u16) -> Result<HolidaySet> {
    // reject years outside the date range even for calendars with no rules
    Date::from_ymd(year, 1, 1)?;
    let mut entries = Vec::new();
    for fixed in calendar.fixed_holidays() {
        entries.extend(fixed.in_year(year)?);
    }
    entries.extend(calendar.variable_days(year)?);
    Ok(HolidaySet::new(year, entries))
}

// ── Region calendar ───────────────────────────────────────────────────────────

/// A calendar assembled from a [`RuleConfiguration`].
///
/// Its variable days are the concatenation of the configuration's
/// generators, in declaration order.
#[derive(Debug)]
pub struct RegionCalendar {
    name: String,
    config: RuleConfiguration,
    weekend: WeekendDefinition,
    cache: YearCache,
}

impl RegionCalendar {
    /// Create a calendar with an empty cache.
    pub fn new(name: impl Into<String>, config: RuleConfiguration, weekend: WeekendDefinition) -> Self {
        Self {
            name: name.into(),
            config,
            weekend,
            cache: YearCache::new(),
        }
    }

    /// The rule configuration.
    pub fn config(&self) -> &RuleConfiguration {
        &self.config
    }

    /// The weekend definition.
    pub fn weekend(&self) -> WeekendDefinition {
        self.weekend
    }
}

impl Calendar for RegionCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_cache(&self) -> &YearCache {
        &self.cache
    }

    fn fixed_holidays(&self) -> &[FixedHoliday] {
        self.config.fixed_holidays()
    }

    fn variable_days(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut days = Vec::new();
        for generator in self.config.generators() {
            days.extend(generator.holidays(year, &self.weekend)?);
        }
        Ok(days)
    }

    fn weekend_days(&self) -> Result<WeekendDefinition> {
        Ok(self.weekend)
    }
}
