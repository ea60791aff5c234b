// File: ./src/calendar.rs
// Week navigation and the days shown as grid columns.
use crate::model::DAYS_PER_WEEK;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekNav {
    Previous,
    Current,
    Next,
}

/// New week offset after a navigation button. `Current` always resets to 0.
pub fn shift_week(current: i64, nav: WeekNav) -> i64 {
    match nav {
        WeekNav::Previous => current - 1,
        WeekNav::Current => 0,
        WeekNav::Next => current + 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub month: u32,
    pub weekday: Weekday,
    /// "Mon"
    pub weekday_name: String,
    /// "Oct"
    pub month_name: String,
}

impl CalendarDay {
    fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            month: date.month(),
            weekday: date.weekday(),
            weekday_name: date.format("%a").to_string(),
            month_name: date.format("%b").to_string(),
        }
    }

    /// Column header, e.g. "Mon 12".
    pub fn header(&self) -> String {
        format!("{} {}", self.weekday_name, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    pub first_day: NaiveDate,
    pub days: Vec<CalendarDay>,
}

impl CalendarWeek {
    pub fn week_number(&self) -> u32 {
        self.first_day.iso_week().week()
    }

    /// "October 2026", taken from the first day of the week.
    pub fn month_label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    pub fn headers(&self) -> Vec<String> {
        self.days.iter().map(CalendarDay::header).collect()
    }
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date - Duration::days(back as i64)
}

/// The seven days of the week `offset` weeks away from the week holding `today`.
pub fn compute_calendar_week(offset: i64, today: NaiveDate, week_start: Weekday) -> CalendarWeek {
    let first_day = start_of_week(today, week_start) + Duration::weeks(offset);
    let last_day = first_day + Duration::days(DAYS_PER_WEEK as i64 - 1);
    let days = split_days(first_day, last_day);
    assert_eq!(days.len(), DAYS_PER_WEEK, "a calendar week must have 7 days");

    CalendarWeek {
        first_day,
        days: days.into_iter().map(CalendarDay::from_date).collect(),
    }
}

/// Every day from `start` through `end` inclusive.
///
/// # Panics
/// If `end` precedes `start`: the interval has no start boundary.
pub fn split_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    assert!(start <= end, "invalid start date in interval {start}..{end}");
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Start points of `step_minutes` slices of the half-open range `start..end`,
/// used to fill time pickers.
///
/// # Panics
/// On a zero step or an empty range.
pub fn time_steps(start: NaiveTime, end: NaiveTime, step_minutes: u32) -> Vec<NaiveTime> {
    assert!(step_minutes > 0, "invalid step in interval");
    assert!(start < end, "invalid start time in interval {start}..{end}");

    let step = Duration::minutes(step_minutes as i64);
    let mut steps = Vec::new();
    let mut t = start;
    while t < end {
        steps.push(t);
        let (next, wrapped) = t.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        t = next;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_on_monday() {
        // Saturday
        let week = compute_calendar_week(0, date(2026, 10, 17), Weekday::Mon);
        assert_eq!(week.first_day, date(2026, 10, 12));
        assert_eq!(week.days.last().unwrap().date, date(2026, 10, 18));
        assert_eq!(week.headers()[0], "Mon 12");
        assert_eq!(week.week_number(), 42);
        assert_eq!(week.month_label(), "October 2026");
    }

    #[test]
    fn sunday_start() {
        let week = compute_calendar_week(0, date(2026, 10, 17), Weekday::Sun);
        assert_eq!(week.first_day, date(2026, 10, 11));
        assert_eq!(week.days[0].weekday_name, "Sun");
        // A Sunday is the first day of its own week.
        assert_eq!(start_of_week(date(2026, 10, 18), Weekday::Sun), date(2026, 10, 18));
    }

    #[test]
    fn week_crossing_year_boundary() {
        let week = compute_calendar_week(1, date(2026, 12, 30), Weekday::Mon);
        assert_eq!(week.first_day, date(2027, 1, 4));
        let back = compute_calendar_week(-1, date(2027, 1, 1), Weekday::Mon);
        assert_eq!(back.first_day, date(2026, 12, 21));
        assert_eq!(back.days[6].month_name, "Dec");
    }

    #[test]
    fn navigation() {
        assert_eq!(shift_week(0, WeekNav::Next), 1);
        assert_eq!(shift_week(0, WeekNav::Previous), -1);
        assert_eq!(shift_week(-3, WeekNav::Current), 0);
        assert_eq!(shift_week(5, WeekNav::Current), 0);
    }

    #[test]
    fn time_steps_are_half_open() {
        let steps = time_steps(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            10,
        );
        assert_eq!(steps.len(), 54);
        assert_eq!(steps[1], NaiveTime::from_hms_opt(8, 10, 0).unwrap());
        assert_eq!(*steps.last().unwrap(), NaiveTime::from_hms_opt(16, 50, 0).unwrap());
    }

    #[test]
    fn time_steps_stop_before_midnight_wrap() {
        let steps = time_steps(
            NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
            30,
        );
        assert_eq!(steps.len(), 2);
    }

    #[test]
    #[should_panic(expected = "invalid start date in interval")]
    fn reversed_day_interval_fails_fast() {
        split_days(date(2026, 10, 18), date(2026, 10, 12));
    }

    #[test]
    #[should_panic(expected = "invalid step in interval")]
    fn zero_step_fails_fast() {
        time_steps(NaiveTime::default(), NaiveTime::from_hms_opt(1, 0, 0).unwrap(), 0);
    }
}
