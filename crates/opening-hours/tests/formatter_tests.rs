//! Tests for 12-hour rendering and report assembly.

use opening_hours::formatter::{format_week, render_day, render_interval, render_time};
use opening_hours::{build_week, Day, DaySchedule, Event, Interval, ReportOptions, WeekInput};

fn week_of(input: WeekInput) -> opening_hours::WeekSchedule {
    build_week(&input, &ReportOptions::default()).unwrap()
}

// ── Time rendering ──────────────────────────────────────────────────────────

#[test]
fn midnight_is_twelve_am() {
    assert_eq!(render_time(0), "12 am");
}

#[test]
fn noon_is_twelve_pm() {
    assert_eq!(render_time(43200), "12 pm");
}

#[test]
fn full_hours_omit_minutes() {
    assert_eq!(render_time(3600), "1 am");
    assert_eq!(render_time(36000), "10 am");
    assert_eq!(render_time(64800), "6 pm");
    assert_eq!(render_time(75600), "9 pm");
}

#[test]
fn minutes_are_zero_padded() {
    assert_eq!(render_time(36300), "10:05 am");
    assert_eq!(render_time(37800), "10:30 am");
    assert_eq!(render_time(43260), "12:01 pm");
    assert_eq!(render_time(60), "12:01 am");
}

#[test]
fn interval_uses_dash_separator() {
    let interval = Interval {
        start: 36000,
        end: 64800,
    };
    assert_eq!(render_interval(&interval), "10 am - 6 pm");
}

#[test]
fn closed_day_renders_closed() {
    assert_eq!(render_day(&DaySchedule::closed(Day::Monday)), "Closed");
}

// ── Report ──────────────────────────────────────────────────────────────────

#[test]
fn report_has_seven_lines_in_day_order() {
    let report = format_week(&week_of(WeekInput::new()));
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 7);
    for (line, day) in lines.iter().zip(Day::ALL) {
        assert!(line.starts_with(&format!("{}: ", day.label())), "{line}");
    }
    assert!(report.ends_with('\n'));
}

#[test]
fn single_open_day() {
    let week = week_of(
        WeekInput::new().with_day(Day::Tuesday, vec![Event::open(36000), Event::close(64800)]),
    );
    assert_eq!(
        format_week(&week),
        "Monday: Closed\n\
         Tuesday: 10 am - 6 pm\n\
         Wednesday: Closed\n\
         Thursday: Closed\n\
         Friday: Closed\n\
         Saturday: Closed\n\
         Sunday: Closed\n"
    );
}

#[test]
fn multiple_intervals_join_with_comma() {
    let week = week_of(WeekInput::new().with_day(
        Day::Monday,
        vec![
            Event::open(0),
            Event::close(3600),
            Event::open(43200),
            Event::close(46800),
        ],
    ));
    let report = format_week(&week);
    assert_eq!(
        report.lines().next(),
        Some("Monday: 12 am - 1 am, 12 pm - 1 pm")
    );
}

#[test]
fn overnight_interval_renders_next_day_close() {
    let input = WeekInput::new()
        .with_day(Day::Friday, vec![Event::open(64800)])
        .with_day(Day::Saturday, vec![Event::close(3600)]);
    let week = build_week(&input, &ReportOptions::default().with_overnight(true)).unwrap();
    let report = format_week(&week);
    assert!(report.contains("Friday: 6 pm - 1 am\n"));
    assert!(report.contains("Saturday: Closed\n"));
}

#[test]
fn formatting_is_idempotent() {
    let week = week_of(
        WeekInput::new().with_day(Day::Saturday, vec![Event::open(32400), Event::close(82800)]),
    );
    assert_eq!(format_week(&week), format_week(&week));
}
