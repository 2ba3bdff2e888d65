//! Relative day index across month, leap-year and year boundaries.

#![allow(clippy::unwrap_used)]

use calendar_core::{date_at, day_index, day_offset, CalendarDate, DateError, DayIndex, Weekday};

#[test]
fn window_start_and_third_day() {
    assert_eq!(day_index("2025-01-08", "2025-01-06").unwrap().get(), 3);
    assert_eq!(day_index("2025-01-06", "2025-01-06").unwrap().get(), 1);
}

#[test]
fn every_day_of_a_window_spanning_new_year() {
    let anchor = CalendarDate::parse("2024-12-25").unwrap();
    for day in DayIndex::all() {
        let date = date_at(anchor, day).unwrap();
        let text = date.to_string();
        assert_eq!(day_index(&text, "2024-12-25").unwrap(), day, "{text}");
    }
    assert_eq!(date_at(anchor, DayIndex::LAST).unwrap().to_string(), "2025-01-07");
}

#[test]
fn leap_day_is_counted() {
    assert_eq!(day_offset("2024-03-01", "2024-02-28").unwrap(), 2);
    assert_eq!(day_offset("2025-03-01", "2025-02-28").unwrap(), 1);
    // Century rule: 2100 is not a leap year.
    assert_eq!(day_offset("2100-03-01", "2100-02-28").unwrap(), 1);
}

#[test]
fn negative_offsets_are_reported() {
    assert_eq!(day_offset("2025-01-01", "2025-01-06").unwrap(), -5);
    assert_eq!(
        day_index("2025-01-01", "2025-01-06"),
        Err(DateError::OutsideWindow { offset: -4 })
    );
}

#[test]
fn unparseable_anchor_is_an_error() {
    assert_eq!(day_index("2025-01-06", "tomorrow"), Err(DateError::Malformed));
}

#[test]
fn header_weekday_follows_anchor() {
    let anchor = CalendarDate::parse("2025-01-08T00:00:00").unwrap();
    assert_eq!(anchor.weekday(), Weekday::Wed);
    let next = date_at(anchor, DayIndex::new(6).unwrap()).unwrap();
    assert_eq!(next.weekday(), Weekday::Mon);
}
