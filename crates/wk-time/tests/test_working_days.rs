//! Working-day arithmetic, per-call exceptions, and the year cache.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use wk_core::Error;
use wk_time::calendars::France;
use wk_time::{
    Calendar, Date, FixedHoliday, FnRule, Holiday, RegionCalendar, RuleConfiguration,
    WeekendDefinition, WorkingDayExceptions, YearCache,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Every day is a working day except Christmas and New Year's Day.
#[derive(Debug)]
struct MockCalendar {
    fixed: Vec<FixedHoliday>,
    cache: YearCache,
}

impl MockCalendar {
    fn new() -> Self {
        Self {
            fixed: vec![
                FixedHoliday::new(12, 25, "Christmas").unwrap(),
                FixedHoliday::new(1, 1, "New year").unwrap(),
            ],
            cache: YearCache::new(),
        }
    }
}

impl Calendar for MockCalendar {
    fn name(&self) -> &str {
        "Mock"
    }

    fn holiday_cache(&self) -> &YearCache {
        &self.cache
    }

    fn fixed_holidays(&self) -> &[FixedHoliday] {
        &self.fixed
    }

    fn weekend_days(&self) -> wk_core::Result<WeekendDefinition> {
        Ok(WeekendDefinition::NONE)
    }
}

/// Holiday table only; no weekend definition.
#[derive(Debug, Default)]
struct BareCalendar {
    cache: YearCache,
}

impl Calendar for BareCalendar {
    fn name(&self) -> &str {
        "Bare"
    }

    fn holiday_cache(&self) -> &YearCache {
        &self.cache
    }
}

// ─── Mock calendar ───────────────────────────────────────────────────────────

#[test]
fn mock_holidays_sorted() {
    let cal = MockCalendar::new();
    let holidays = cal.holidays(Some(2013)).unwrap();
    let dates: Vec<Date> = holidays.iter().map(|h| h.date).collect();
    assert_eq!(dates, vec![date(2013, 1, 1), date(2013, 12, 25)]);
    assert_eq!(holidays.year(), 2013);
}

#[test]
fn add_working_days_skips_holidays() {
    let cal = MockCalendar::new();
    assert_eq!(
        cal.add_working_days(date(2011, 12, 20), 20).unwrap(),
        date(2012, 1, 11)
    );
    assert_eq!(
        cal.sub_working_days(date(2012, 1, 11), 20).unwrap(),
        date(2011, 12, 20)
    );
}

#[test]
fn add_zero_working_days() {
    let cal = MockCalendar::new();
    // the start day is returned even when it is a holiday
    assert_eq!(
        cal.add_working_days(date(2013, 12, 25), 0).unwrap(),
        date(2013, 12, 25)
    );
}

#[test]
fn negative_count_is_rejected() {
    let cal = MockCalendar::new();
    assert!(matches!(
        cal.add_working_days(date(2013, 12, 20), -1),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        cal.sub_working_days(date(2013, 12, 20), -1),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn add_exceptions() {
    let cal = MockCalendar::new();
    let christmas = date(2013, 12, 25);
    assert!(!cal.is_working_day(christmas).unwrap());

    let working = WorkingDayExceptions::new().with_extra_working_day(christmas);
    assert!(cal.is_working_day_with(christmas, &working).unwrap());

    let target = cal.add_working_days(date(2013, 12, 20), 1).unwrap();
    assert!(cal.is_working_day(target).unwrap());
    let off = WorkingDayExceptions::new().with_extra_holiday(target);
    assert!(!cal.is_working_day_with(target, &off).unwrap());
    assert!(cal.is_holiday_with(target, &off).unwrap());
    assert!(!cal.is_holiday(target).unwrap());
}

#[test]
fn add_working_days_with_exceptions() {
    let cal = MockCalendar::new();
    let exceptions = WorkingDayExceptions::new()
        .with_extra_working_day(date(2013, 12, 25))
        .with_extra_holidays([date(2013, 12, 23), date(2013, 12, 24)]);
    assert_eq!(
        cal.add_working_days_with(date(2013, 12, 22), 1, &exceptions)
            .unwrap(),
        date(2013, 12, 25)
    );
    assert_eq!(
        cal.sub_working_days_with(date(2013, 12, 26), 2, &exceptions)
            .unwrap(),
        date(2013, 12, 22)
    );
}

#[test]
fn working_days_between() {
    let cal = MockCalendar::new();
    assert_eq!(
        cal.working_days_between(date(2011, 12, 20), date(2012, 1, 11))
            .unwrap(),
        20
    );
    assert_eq!(
        cal.working_days_between(date(2012, 1, 11), date(2011, 12, 20))
            .unwrap(),
        -20
    );
    assert_eq!(
        cal.working_days_between(date(2013, 5, 2), date(2013, 5, 2))
            .unwrap(),
        0
    );
}

#[test]
fn holiday_labels() {
    let cal = MockCalendar::new();
    assert_eq!(
        cal.holiday_label(date(2013, 12, 25)).unwrap().as_deref(),
        Some("Christmas")
    );
    assert_eq!(cal.holiday_label(date(2013, 12, 24)).unwrap(), None);
}

// ─── Calendar without a weekend ──────────────────────────────────────────────

#[test]
fn missing_weekend_is_unsupported() {
    let cal = BareCalendar::default();
    assert!(cal.holidays(Some(2013)).unwrap().is_empty());
    assert!(!cal.is_holiday(date(2013, 1, 1)).unwrap());
    assert!(matches!(
        cal.is_working_day(date(2013, 1, 2)),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        cal.add_working_days(date(2013, 1, 2), 1),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        cal.find_following_working_day(date(2013, 1, 5)),
        Err(Error::UnsupportedOperation(_))
    ));
}

#[test]
fn out_of_range_year() {
    let cal = BareCalendar::default();
    assert!(matches!(cal.holidays(Some(2200)), Err(Error::Date(_))));
    assert!(cal.holiday_cache().is_empty());
}

// ─── Weekends ────────────────────────────────────────────────────────────────

#[test]
fn find_following_working_day() {
    let cal = France::new().unwrap();
    // 2013-07-13 is a Saturday; holidays are not considered
    assert_eq!(
        cal.find_following_working_day(date(2013, 7, 13)).unwrap(),
        date(2013, 7, 15)
    );
    assert_eq!(
        cal.find_following_working_day(date(2013, 7, 12)).unwrap(),
        date(2013, 7, 12)
    );
}

#[test]
fn friday_saturday_weekend() {
    let config = RuleConfiguration::builder().build().unwrap();
    let cal = RegionCalendar::new("Gulf", config, WeekendDefinition::FRIDAY_SATURDAY);
    // 2013-05-17 is a Friday
    assert!(!cal.is_working_day(date(2013, 5, 17)).unwrap());
    assert!(!cal.is_working_day(date(2013, 5, 18)).unwrap());
    assert!(cal.is_working_day(date(2013, 5, 19)).unwrap());
    assert_eq!(
        cal.add_working_days(date(2013, 5, 16), 1).unwrap(),
        date(2013, 5, 19)
    );
}

// ─── Year cache ──────────────────────────────────────────────────────────────

#[test]
fn cache_returns_same_set() {
    let cal = MockCalendar::new();
    let first = cal.holidays(Some(2013)).unwrap();
    let second = cal.holidays(Some(2013)).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cal.holiday_cache().len(), 1);
    assert!(cal.holiday_cache().contains_year(2013));
}

#[test]
fn failed_year_is_not_cached() {
    let fail = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&fail);
    let config = RuleConfiguration::builder()
        .with_fixed(1, 1, "New year")
        .with_rule(FnRule::new(
            "flaky",
            move |year: u16, _: &WeekendDefinition| -> wk_core::Result<Vec<Holiday>> {
                if flag.load(Ordering::SeqCst) {
                    wk_core::fail!("generator unavailable for {}", year);
                }
                Ok(vec![Holiday::new(Date::from_ymd(year, 6, 1)?, "Flaky Day")])
            },
        ))
        .build()
        .unwrap();
    let cal = RegionCalendar::new("Flaky", config, WeekendDefinition::SATURDAY_SUNDAY);

    assert!(matches!(cal.holidays(Some(2013)), Err(Error::Runtime(_))));
    assert!(!cal.holiday_cache().contains_year(2013));

    fail.store(false, Ordering::SeqCst);
    let set = cal.holidays(Some(2013)).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.label(date(2013, 6, 1)), Some("Flaky Day"));
}

#[test]
fn concurrent_readers_share_one_set() {
    let cal = Arc::new(France::new().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cal = Arc::clone(&cal);
            std::thread::spawn(move || cal.holidays(Some(2013)).unwrap())
        })
        .collect();
    let sets: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let cached = cal.holidays(Some(2013)).unwrap();
    for set in &sets {
        assert!(Arc::ptr_eq(set, &cached));
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    /// Holidays come back sorted and stay the same object across calls.
    #[test]
    fn holidays_sorted_and_stable(year in 1950u16..2100) {
        let cal = France::new().unwrap();
        let first = cal.holidays(Some(year)).unwrap();
        prop_assert!(first.entries().windows(2).all(|w| w[0].date <= w[1].date));
        prop_assert!(first.iter().all(|h| h.date.year() == year));
        let second = cal.holidays(Some(year)).unwrap();
        prop_assert!(Arc::ptr_eq(&first, &second));
    }

    /// A weekend day is never a working day, and a holiday never is either.
    #[test]
    fn weekend_and_holiday_are_not_working(offset in 0i32..36_500) {
        let cal = France::new().unwrap();
        let day = date(1950, 1, 1).add_days(offset).unwrap();
        let working = cal.is_working_day(day).unwrap();
        if WeekendDefinition::SATURDAY_SUNDAY.is_weekend(day) || cal.is_holiday(day).unwrap() {
            prop_assert!(!working);
        } else {
            prop_assert!(working);
        }
    }

    /// An extra working day wins over everything; an extra holiday wins
    /// over a plain working day.
    #[test]
    fn exception_precedence(offset in 0i32..3_650) {
        let cal = France::new().unwrap();
        let day = date(2010, 1, 1).add_days(offset).unwrap();
        let both = WorkingDayExceptions::new()
            .with_extra_working_day(day)
            .with_extra_holiday(day);
        prop_assert!(cal.is_working_day_with(day, &both).unwrap());
        let off = WorkingDayExceptions::new().with_extra_holiday(day);
        prop_assert!(!cal.is_working_day_with(day, &off).unwrap());
    }

    /// Adding then subtracting the same count of working days returns to a
    /// working start day.
    #[test]
    fn add_then_sub(offset in 0i32..3_650, n in 0i32..60) {
        let cal = France::new().unwrap();
        let start = cal
            .add_working_days(date(2010, 1, 1).add_days(offset).unwrap(), 1)
            .unwrap();
        let end = cal.add_working_days(start, n).unwrap();
        prop_assert!(end >= start);
        prop_assert_eq!(cal.sub_working_days(end, n).unwrap(), start);
        prop_assert_eq!(cal.working_days_between(start, end).unwrap(), n);
    }
}
