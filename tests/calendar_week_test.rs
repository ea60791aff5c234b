use chrono::{Duration, NaiveDate, Weekday};
use gastro::calendar::{WeekNav, compute_calendar_week, shift_week};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

#[test]
fn every_offset_is_seven_consecutive_days_from_week_zero() {
    let base = compute_calendar_week(0, today(), Weekday::Mon).first_day;
    for offset in -60..=60 {
        let week = compute_calendar_week(offset, today(), Weekday::Mon);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.first_day, base + Duration::weeks(offset));
        for pair in week.days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(week.days[0].weekday, Weekday::Mon);
    }
}

#[test]
fn same_input_same_week() {
    for offset in [-2, 0, 7] {
        assert_eq!(
            compute_calendar_week(offset, today(), Weekday::Sun),
            compute_calendar_week(offset, today(), Weekday::Sun)
        );
    }
}

#[test]
fn reset_from_anywhere_returns_to_zero() {
    for start in [-3, 5, 0, i64::from(i32::MAX)] {
        assert_eq!(shift_week(start, WeekNav::Current), 0);
    }
    let walked = [WeekNav::Next, WeekNav::Next, WeekNav::Previous]
        .into_iter()
        .fold(0, shift_week);
    assert_eq!(walked, 1);
}
