//! Rule configuration types read from JSON.

#![cfg(feature = "serde")]

use wk_time::{
    ChristianRules, FixedHoliday, IslamicRules, LunarHoliday, WeekendDefinition, Weekday,
};

#[test]
fn christian_rules_fill_missing_toggles() {
    let rules: ChristianRules =
        serde_json::from_str(r#"{ "include_easter_monday": true }"#).unwrap();
    assert!(rules.include_easter_monday);
    assert!(rules.include_christmas);
    assert!(!rules.include_good_friday);
}

#[test]
fn islamic_rules_defaults() {
    let rules: IslamicRules = serde_json::from_str(
        r#"{ "include_eid_al_fitr": true, "extra_days": [{ "month": 7, "day": 27, "label": "Isra and Mi'raj" }] }"#,
    )
    .unwrap();
    assert!(rules.include_eid_al_fitr);
    assert_eq!(rules.length_eid_al_fitr, 1);
    assert_eq!(rules.extra_days.len(), 1);
    assert_eq!(rules.hijri_holidays().len(), 2);
}

#[test]
fn weekend_as_weekday_list() {
    let weekend: WeekendDefinition = serde_json::from_str(r#"["Friday", "Saturday"]"#).unwrap();
    assert_eq!(weekend, WeekendDefinition::FRIDAY_SATURDAY);
    let json = serde_json::to_string(&WeekendDefinition::SATURDAY_SUNDAY).unwrap();
    assert_eq!(json, r#"["Saturday","Sunday"]"#);

    let all = serde_json::to_string(&Weekday::ALL).unwrap();
    assert!(serde_json::from_str::<WeekendDefinition>(&all).is_err());
}

#[test]
fn holiday_tables() {
    let fixed: Vec<FixedHoliday> = serde_json::from_str(
        r#"[{ "month": 7, "day": 14, "label": "Bastille Day" }]"#,
    )
    .unwrap();
    assert_eq!(fixed, vec![FixedHoliday::new(7, 14, "Bastille Day").unwrap()]);

    let lunar: LunarHoliday =
        serde_json::from_str(r#"{ "month": 8, "day": 15, "label": "Chuseok", "days_after": 1 }"#)
            .unwrap();
    assert_eq!(lunar.days_before, 0);
    assert_eq!(lunar.days_after, 1);
}
