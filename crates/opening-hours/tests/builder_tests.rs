//! Tests for assembling the week, in strict and overnight mode.

use opening_hours::{
    build_week, Day, Event, Interval, PairingFault, ReportOptions, ScheduleError, WeekInput,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn strict() -> ReportOptions {
    ReportOptions::default()
}

fn overnight() -> ReportOptions {
    ReportOptions::default().with_overnight(true)
}

fn interval(start: u32, end: u32) -> Interval {
    Interval { start, end }
}

fn pairing_fault(err: ScheduleError) -> (Day, PairingFault) {
    match err {
        ScheduleError::Pairing { day, fault } => (day, fault),
        other => panic!("expected a pairing error, got {other:?}"),
    }
}

// ── Strict mode ─────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_closed_all_week() {
    let week = build_week(&WeekInput::new(), &strict()).unwrap();
    let days: Vec<Day> = week.iter().map(|d| d.day).collect();
    assert_eq!(days, Day::ALL.to_vec());
    assert!(week.iter().all(|d| d.is_closed()));
}

#[test]
fn days_come_out_in_canonical_order_regardless_of_input() {
    let input = WeekInput::new()
        .with_day(Day::Sunday, vec![Event::open(36000), Event::close(43200)])
        .with_day(Day::Monday, vec![Event::open(28800), Event::close(64800)]);
    let week = build_week(&input, &strict()).unwrap();

    assert_eq!(week.get(Day::Monday).intervals, vec![interval(28800, 64800)]);
    assert_eq!(week.get(Day::Sunday).intervals, vec![interval(36000, 43200)]);
    assert!(week.get(Day::Wednesday).is_closed());
}

#[test]
fn pairing_error_names_the_offending_day() {
    let input = WeekInput::new()
        .with_day(Day::Monday, vec![Event::open(36000), Event::close(64800)])
        .with_day(Day::Thursday, vec![Event::open(100)]);
    let (day, fault) = pairing_fault(build_week(&input, &strict()).unwrap_err());
    assert_eq!(day, Day::Thursday);
    assert_eq!(fault, PairingFault::OddCount(1));
}

#[test]
fn strict_mode_rejects_overnight_close() {
    let input = WeekInput::new()
        .with_day(Day::Friday, vec![Event::open(64800)])
        .with_day(Day::Saturday, vec![Event::close(3600)]);
    let (day, _) = pairing_fault(build_week(&input, &strict()).unwrap_err());
    assert_eq!(day, Day::Friday);
}

#[test]
fn unknown_keys_are_ignored_without_validation() {
    let raw = serde_json::json!({
        "funday": [{"type": "open", "value": 0}],
        "monday": [{"type": "open", "value": 36000}, {"type": "close", "value": 64800}]
    });
    let input = WeekInput::from_value(&raw).unwrap();
    assert_eq!(input.unknown_keys().collect::<Vec<_>>(), vec!["funday"]);

    let week = build_week(&input, &strict()).unwrap();
    assert_eq!(week.get(Day::Monday).intervals, vec![interval(36000, 64800)]);
}

#[test]
fn unknown_keys_with_non_list_values_are_ignored_without_validation() {
    let raw = serde_json::json!({
        "tuesday": [{"type": "open", "value": 36000}, {"type": "close", "value": 64800}],
        "note": "seasonal",
        "updated": {"by": "staff"}
    });
    let input = WeekInput::from_value(&raw).unwrap();
    assert_eq!(input.unknown_keys().collect::<Vec<_>>(), vec!["note", "updated"]);

    let week = build_week(&input, &strict()).unwrap();
    assert_eq!(week.get(Day::Tuesday).intervals, vec![interval(36000, 64800)]);
}

#[test]
fn malformed_day_value_is_a_shape_error_at_that_day() {
    let raw = serde_json::json!({"friday": "all day"});
    match WeekInput::from_value(&raw) {
        Err(ScheduleError::Shape { path, .. }) => assert_eq!(path, "friday"),
        other => panic!("expected a shape error, got {other:?}"),
    }
}

// ── Overnight mode ──────────────────────────────────────────────────────────

#[test]
fn close_on_next_day_extends_past_midnight() {
    let input = WeekInput::new()
        .with_day(Day::Friday, vec![Event::open(64800)])
        .with_day(Day::Saturday, vec![Event::close(3600), Event::open(32400), Event::close(39600)]);
    let week = build_week(&input, &overnight()).unwrap();

    let friday = &week.get(Day::Friday).intervals;
    assert_eq!(friday, &vec![interval(64800, 86400 + 3600)]);
    assert!(friday[0].crosses_midnight());
    assert_eq!(friday[0].duration_seconds(), 7 * 3600);
    assert_eq!(week.get(Day::Saturday).intervals, vec![interval(32400, 39600)]);
}

#[test]
fn sunday_is_closed_by_monday() {
    let input = WeekInput::new()
        .with_day(Day::Monday, vec![Event::close(3600)])
        .with_day(Day::Sunday, vec![Event::open(61200)]);
    let week = build_week(&input, &overnight()).unwrap();

    assert!(week.get(Day::Monday).is_closed());
    assert_eq!(week.get(Day::Sunday).intervals, vec![interval(61200, 86400 + 3600)]);
}

#[test]
fn overnight_interval_merges_with_adjacent_one() {
    let input = WeekInput::new()
        .with_day(
            Day::Friday,
            vec![Event::open(36000), Event::close(64800), Event::open(64800)],
        )
        .with_day(Day::Saturday, vec![Event::close(7200)]);
    let week = build_week(&input, &overnight()).unwrap();
    assert_eq!(week.get(Day::Friday).intervals, vec![interval(36000, 86400 + 7200)]);
}

#[test]
fn open_without_next_day_close_is_unclosed() {
    let input = WeekInput::new().with_day(Day::Wednesday, vec![Event::open(72000)]);
    let (day, fault) = pairing_fault(build_week(&input, &overnight()).unwrap_err());
    assert_eq!(day, Day::Wednesday);
    assert_eq!(fault, PairingFault::UnclosedOvernight(72000));
}

#[test]
fn close_without_previous_day_open_is_orphaned() {
    let input = WeekInput::new().with_day(Day::Tuesday, vec![Event::close(3600)]);
    let (day, fault) = pairing_fault(build_week(&input, &overnight()).unwrap_err());
    assert_eq!(day, Day::Tuesday);
    assert_eq!(fault, PairingFault::OrphanClose(3600));
}

#[test]
fn overnight_mode_leaves_plain_days_unchanged() {
    let input = WeekInput::new()
        .with_day(Day::Monday, vec![Event::open(0), Event::close(3600), Event::open(43200), Event::close(46800)]);
    assert_eq!(
        build_week(&input, &overnight()).unwrap(),
        build_week(&input, &strict()).unwrap()
    );
}
