//! Rule composition: weekend definitions, variable-day generators, and the
//! immutable [`RuleConfiguration`] a region calendar is built from.
//!
//! A region calendar does not inherit its holidays; it *holds* the rule
//! components it needs.  Each component implements [`HolidayRule`] and the
//! engine concatenates their output in declaration order.

use crate::christian::ChristianRules;
use crate::date::{last_weekday_in_month, nth_weekday_in_month, Date};
use crate::holiday::{FixedHoliday, Holiday};
use crate::weekday::Weekday;
use std::sync::Arc;
use wk_core::errors::{Error, Result};

// ── Weekend definition ────────────────────────────────────────────────────────

/// The set of weekdays that are non-working by default.
///
/// Stored as a bit mask (bit `n` set for the weekday with ordinal `n`).  A
/// definition may be empty but may not contain all seven days, otherwise
/// no forward search for a working day could terminate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Weekday>", into = "Vec<Weekday>")
)]
pub struct WeekendDefinition(u8);

impl WeekendDefinition {
    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekendDefinition =
        WeekendDefinition((1 << Weekday::Saturday as u8) | (1 << Weekday::Sunday as u8));

    /// Friday and Saturday.
    pub const FRIDAY_SATURDAY: WeekendDefinition =
        WeekendDefinition((1 << Weekday::Friday as u8) | (1 << Weekday::Saturday as u8));

    /// No weekend at all: every day is a potential working day.
    pub const NONE: WeekendDefinition = WeekendDefinition(0);

    /// Build a definition from a list of weekdays.
    pub fn new(days: &[Weekday]) -> Result<Self> {
        let mask = days.iter().fold(0u8, |m, d| m | (1 << d.ordinal()));
        if mask.count_ones() == 7 {
            return Err(Error::InvalidArgument(
                "a weekend cannot span all seven days".into(),
            ));
        }
        Ok(Self(mask))
    }

    /// Return `true` if `weekday` is a weekend day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.ordinal()) != 0
    }

    /// Return `true` if `date` falls on a weekend day.
    pub fn is_weekend(&self, date: Date) -> bool {
        self.contains(date.weekday())
    }

    /// The weekend days, Monday first.
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| self.contains(*d))
            .collect()
    }

    /// First day on or after `day` that is not a weekend day.
    ///
    /// Holidays are ignored: this is the primitive behind observance shifts
    /// such as "Christmas on a Sunday is observed on Monday".
    pub fn following_non_weekend(&self, mut day: Date) -> Result<Date> {
        while self.is_weekend(day) {
            day = day.succ()?;
        }
        Ok(day)
    }
}

impl Default for WeekendDefinition {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl std::fmt::Debug for WeekendDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.days()).finish()
    }
}

impl TryFrom<Vec<Weekday>> for WeekendDefinition {
    type Error = Error;

    fn try_from(days: Vec<Weekday>) -> Result<Self> {
        Self::new(&days)
    }
}

impl From<WeekendDefinition> for Vec<Weekday> {
    fn from(w: WeekendDefinition) -> Self {
        w.days()
    }
}

// ── Variable-day generators ───────────────────────────────────────────────────

/// A generator of variable-date holidays.
///
/// `weekend` is the weekend definition of the calendar the rule is attached
/// to, for rules that shift a day off the weekend.
pub trait HolidayRule: std::fmt::Debug + Send + Sync {
    /// Holidays generated for `year`, in emission order.
    fn holidays(&self, year: u16, weekend: &WeekendDefinition) -> Result<Vec<Holiday>>;
}

/// The *n*-th given weekday of a month (e.g. "2nd Monday of January").
///
/// Emits nothing in a year where the month has fewer than `n` such days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NthWeekdayRule {
    /// Month (1–12).
    pub month: u8,
    /// Weekday to count.
    pub weekday: Weekday,
    /// Occurrence, 1-based.
    pub n: u8,
    /// Display label.
    pub label: String,
}

impl NthWeekdayRule {
    /// Create the rule.
    pub fn new(month: u8, weekday: Weekday, n: u8, label: impl Into<String>) -> Self {
        Self {
            month,
            weekday,
            n,
            label: label.into(),
        }
    }
}

impl HolidayRule for NthWeekdayRule {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        Ok(
            nth_weekday_in_month(year, self.month, self.weekday, self.n, None)?
                .map(|d| Holiday::new(d, self.label.clone()))
                .into_iter()
                .collect(),
        )
    }
}

/// The last given weekday of a month (e.g. "last Monday of May").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastWeekdayRule {
    /// Month (1–12).
    pub month: u8,
    /// Weekday to look for.
    pub weekday: Weekday,
    /// Display label.
    pub label: String,
}

impl LastWeekdayRule {
    /// Create the rule.
    pub fn new(month: u8, weekday: Weekday, label: impl Into<String>) -> Self {
        Self {
            month,
            weekday,
            label: label.into(),
        }
    }
}

impl HolidayRule for LastWeekdayRule {
    fn holidays(&self, year: u16, _weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let day = last_weekday_in_month(year, self.month, self.weekday)?;
        Ok(vec![Holiday::new(day, self.label.clone())])
    }
}

/// A generator backed by a closure, for one-off regional policies.
pub struct FnRule<F> {
    name: &'static str,
    f: F,
}

impl<F> FnRule<F>
where
    F: Fn(u16, &WeekendDefinition) -> Result<Vec<Holiday>> + Send + Sync,
{
    /// Wrap `f`; `name` is only used for `Debug` output.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> std::fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnRule").field(&self.name).finish()
    }
}

impl<F> HolidayRule for FnRule<F>
where
    F: Fn(u16, &WeekendDefinition) -> Result<Vec<Holiday>> + Send + Sync,
{
    fn holidays(&self, year: u16, weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        (self.f)(year, weekend)
    }
}

/// Observe New Year's Day on the following working day when January 1 falls
/// on a weekend.
#[derive(Debug, Clone, Copy, Default)]
struct NewYearShift;

impl HolidayRule for NewYearShift {
    fn holidays(&self, year: u16, weekend: &WeekendDefinition) -> Result<Vec<Holiday>> {
        let new_year = Date::from_ymd(year, 1, 1)?;
        if !weekend.is_weekend(new_year) {
            return Ok(Vec::new());
        }
        let shift = weekend.following_non_weekend(new_year)?;
        Ok(vec![Holiday::new(shift, "New Year shift")])
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// The rule set a region calendar is constructed with.
///
/// Immutable once built; use [`RuleConfiguration::builder`].
#[derive(Debug, Clone, Default)]
pub struct RuleConfiguration {
    fixed_holidays: Vec<FixedHoliday>,
    christian: Option<ChristianRules>,
    shift_new_years_day: bool,
    rules: Vec<Arc<dyn HolidayRule>>,
}

impl RuleConfiguration {
    /// Begin building a configuration.
    pub fn builder() -> RuleConfigurationBuilder {
        RuleConfigurationBuilder::default()
    }

    /// The fixed-date holiday table, in table order.
    pub fn fixed_holidays(&self) -> &[FixedHoliday] {
        &self.fixed_holidays
    }

    /// The Christian toggles, if the calendar observes Easter-based days.
    pub fn christian(&self) -> Option<&ChristianRules> {
        self.christian.as_ref()
    }

    /// Whether New Year's Day is shifted off the weekend.
    pub fn shift_new_years_day(&self) -> bool {
        self.shift_new_years_day
    }

    /// Variable-day generators in declaration order: the New Year shift,
    /// then the Christian rules, then the custom rules.
    pub fn generators(&self) -> Vec<&dyn HolidayRule> {
        let mut generators: Vec<&dyn HolidayRule> = Vec::with_capacity(self.rules.len() + 2);
        if self.shift_new_years_day {
            generators.push(&NewYearShift);
        }
        if let Some(christian) = &self.christian {
            generators.push(christian);
        }
        for rule in &self.rules {
            generators.push(rule.as_ref());
        }
        generators
    }
}

/// Builder for [`RuleConfiguration`].
#[derive(Debug, Default)]
pub struct RuleConfigurationBuilder {
    fixed_holidays: Vec<FixedHoliday>,
    christian: Option<ChristianRules>,
    shift_new_years_day: bool,
    rules: Vec<Arc<dyn HolidayRule>>,
}

impl RuleConfigurationBuilder {
    /// Append a fixed-date holiday to the table.
    pub fn with_fixed(mut self, month: u8, day: u8, label: impl Into<String>) -> Self {
        self.fixed_holidays.push(FixedHoliday {
            month,
            day,
            label: label.into(),
        });
        self
    }

    /// Append several fixed-date holidays.
    pub fn with_fixed_holidays(mut self, holidays: impl IntoIterator<Item = FixedHoliday>) -> Self {
        self.fixed_holidays.extend(holidays);
        self
    }

    /// Compose with the Easter-based / Christian feast rules.
    pub fn with_christian(mut self, rules: ChristianRules) -> Self {
        self.christian = Some(rules);
        self
    }

    /// Whether to observe New Year's Day on the following working day when
    /// it falls on a weekend.
    pub fn shift_new_years_day(mut self, flag: bool) -> Self {
        self.shift_new_years_day = flag;
        self
    }

    /// Append a variable-day generator.
    pub fn with_rule(mut self, rule: impl HolidayRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Append an already shared generator.
    pub fn with_shared_rule(mut self, rule: Arc<dyn HolidayRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validate the fixed table and build the configuration.
    pub fn build(self) -> Result<RuleConfiguration> {
        for holiday in &self.fixed_holidays {
            holiday.validate()?;
        }
        Ok(RuleConfiguration {
            fixed_holidays: self.fixed_holidays,
            christian: self.christian,
            shift_new_years_day: self.shift_new_years_day,
            rules: self.rules,
        })
    }
}
