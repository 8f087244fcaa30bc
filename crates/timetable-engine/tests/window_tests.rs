//! Tests for viewport date windows, navigation, and weekend skipping.

use chrono::NaiveDate;
use timetable_engine::{
    first_day_of_week, last_working_day_of_week, skip_weekend, step, window, SizeClass,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn narrow_window_is_the_anchor_day() {
    let anchor = date(2024, 1, 10); // Wednesday
    let w = window(anchor, SizeClass::Narrow);

    assert_eq!(w.start, anchor);
    assert_eq!(w.end, anchor);
}

#[test]
fn medium_window_is_three_days_centered() {
    let anchor = date(2024, 1, 10);
    let w = window(anchor, SizeClass::Medium);

    assert_eq!(w.start, date(2024, 1, 9));
    assert_eq!(w.end, date(2024, 1, 11));
}

#[test]
fn wide_window_is_monday_through_friday() {
    let anchor = date(2024, 1, 10); // Wednesday
    let w = window(anchor, SizeClass::Wide);

    assert_eq!(w.start, date(2024, 1, 8)); // Monday
    assert_eq!(w.end, date(2024, 1, 12)); // Friday
}

#[test]
fn wide_window_from_monday_anchor() {
    let anchor = date(2024, 1, 8);
    let w = window(anchor, SizeClass::Wide);

    assert_eq!(w.start, date(2024, 1, 8));
    assert_eq!(w.end, date(2024, 1, 12));
}

#[test]
fn saturday_anchor_skips_to_next_working_week() {
    // Saturday 2024-01-13 → Monday 2024-01-15, window Mon–Fri.
    let anchor = skip_weekend(date(2024, 1, 13));
    assert_eq!(anchor, date(2024, 1, 15));

    let w = window(anchor, SizeClass::Wide);
    assert_eq!(w.start, date(2024, 1, 15));
    assert_eq!(w.end, date(2024, 1, 19));
}

#[test]
fn sunday_skips_one_day() {
    assert_eq!(skip_weekend(date(2024, 1, 14)), date(2024, 1, 15));
}

#[test]
fn weekdays_pass_through_skip_unchanged() {
    for day in 8..=12 {
        let d = date(2024, 1, day);
        assert_eq!(skip_weekend(d), d);
    }
}

#[test]
fn narrow_step_moves_one_day() {
    // Wednesday 2024-01-10, step +1 → 2024-01-11, window is that single day.
    let anchor = step(date(2024, 1, 10), SizeClass::Narrow, 1);
    assert_eq!(anchor, date(2024, 1, 11));

    let w = window(anchor, SizeClass::Narrow);
    assert_eq!(w.start, date(2024, 1, 11));
    assert_eq!(w.end, date(2024, 1, 11));
}

#[test]
fn medium_step_moves_one_day() {
    assert_eq!(
        step(date(2024, 1, 10), SizeClass::Medium, -1),
        date(2024, 1, 9)
    );
}

#[test]
fn wide_step_moves_a_whole_week() {
    assert_eq!(
        step(date(2024, 1, 10), SizeClass::Wide, 1),
        date(2024, 1, 17)
    );
    assert_eq!(
        step(date(2024, 1, 10), SizeClass::Wide, -1),
        date(2024, 1, 3)
    );
}

#[test]
fn only_the_sign_of_direction_matters() {
    assert_eq!(
        step(date(2024, 1, 10), SizeClass::Narrow, 5),
        date(2024, 1, 11)
    );
}

#[test]
fn week_boundaries_for_every_weekday() {
    // 2024-01-08 is a Monday; the whole week maps to the same bounds.
    for day in 8..=14 {
        let d = date(2024, 1, day);
        assert_eq!(first_day_of_week(d), date(2024, 1, 8), "day {}", day);
        assert_eq!(last_working_day_of_week(d), date(2024, 1, 12), "day {}", day);
    }
}

#[test]
fn days_iterates_the_inclusive_range() {
    let w = window(date(2024, 1, 10), SizeClass::Wide);
    let days: Vec<NaiveDate> = w.days().collect();

    assert_eq!(days.len(), 5);
    assert_eq!(days[0], date(2024, 1, 8));
    assert_eq!(days[4], date(2024, 1, 12));
}

#[test]
fn one_day_window_yields_one_day() {
    let w = window(date(2024, 1, 10), SizeClass::Narrow);
    assert_eq!(w.days().count(), 1);
}

#[test]
fn size_class_parses_from_str() {
    assert_eq!("narrow".parse::<SizeClass>().unwrap(), SizeClass::Narrow);
    assert_eq!("medium".parse::<SizeClass>().unwrap(), SizeClass::Medium);
    assert_eq!("wide".parse::<SizeClass>().unwrap(), SizeClass::Wide);
    assert!("desktop".parse::<SizeClass>().is_err());
}
