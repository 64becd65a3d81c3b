//! Render a [`WeekSchedule`] as the seven-line opening hours report.
//!
//! ```text
//! Monday: Closed
//! Tuesday: 10 am - 6 pm
//! ...
//! ```

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::schedule::{DaySchedule, Interval, WeekSchedule};

/// Rendering for a day without intervals.
pub const CLOSED: &str = "Closed";

/// Separator between intervals on the same day.
pub const INTERVAL_SEPARATOR: &str = ", ";

/// Render seconds since midnight on a 12-hour clock.
///
/// Minutes are omitted on the full hour and seconds are discarded. Values past
/// midnight wrap, so an overnight close renders as the next day's time.
///
/// # Examples
///
/// ```
/// use opening_hours::formatter::render_time;
///
/// assert_eq!(render_time(0), "12 am");
/// assert_eq!(render_time(36300), "10:05 am");
/// assert_eq!(render_time(64800), "6 pm");
/// ```
pub fn render_time(seconds: u32) -> String {
    let (time, _) =
        NaiveTime::MIN.overflowing_add_signed(TimeDelta::seconds(i64::from(seconds)));
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "pm" } else { "am" };

    match time.minute() {
        0 => format!("{hour} {suffix}"),
        minute => format!("{hour}:{minute:02} {suffix}"),
    }
}

/// Render an interval as `"<start> - <end>"`.
pub fn render_interval(interval: &Interval) -> String {
    format!(
        "{} - {}",
        render_time(interval.start),
        render_time(interval.end)
    )
}

/// Render the part of a report line after the day name.
pub fn render_day(day: &DaySchedule) -> String {
    if day.is_closed() {
        return CLOSED.to_string();
    }
    day.intervals
        .iter()
        .map(render_interval)
        .collect::<Vec<_>>()
        .join(INTERVAL_SEPARATOR)
}

/// Render the full report: one `"<Day>: <hours>"` line per day, Monday
/// first, each terminated by a newline.
pub fn format_week(week: &WeekSchedule) -> String {
    week.iter()
        .map(|day| format!("{}: {}\n", day.day.label(), render_day(day)))
        .collect()
}
