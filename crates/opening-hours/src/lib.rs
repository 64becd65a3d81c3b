//! # opening-hours
//!
//! Turns a weekly opening hours record, given as unsorted open/close events in
//! seconds since midnight, into a human-readable report with one line per day.
//!
//! ## Quick start
//!
//! ```rust
//! use opening_hours::{report_str, ReportOptions};
//!
//! let json = r#"{"tuesday":[{"type":"open","value":36000},{"type":"close","value":64800}]}"#;
//! let report = report_str(json, ReportOptions::default()).unwrap();
//! assert_eq!(
//!     report,
//!     "Monday: Closed\nTuesday: 10 am - 6 pm\nWednesday: Closed\nThursday: Closed\n\
//!      Friday: Closed\nSaturday: Closed\nSunday: Closed\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`schedule`]: days, raw events, intervals and the week
//! - [`pairer`]: one day's events → sorted open intervals
//! - [`builder`]: raw record → [`WeekSchedule`], including overnight linking
//! - [`validate`]: optional shape check of the raw record
//! - [`formatter`]: [`WeekSchedule`] → text report
//! - [`options`]: [`ReportOptions`]
//! - [`error`]: error types

pub mod builder;
pub mod error;
pub mod formatter;
pub mod options;
pub mod pairer;
pub mod schedule;
pub mod validate;

pub use builder::build_week;
pub use error::{PairingFault, Result, ScheduleError};
pub use formatter::format_week;
pub use options::ReportOptions;
pub use pairer::pair;
pub use schedule::{Day, DaySchedule, Event, EventKind, Interval, WeekInput, WeekSchedule};
pub use validate::validate;

/// Load, optionally validate, and pair a raw record.
///
/// # Errors
/// Returns `ScheduleError::UnknownDay` or `ScheduleError::Shape` from validation
/// (only when `options.validate` is set), `ScheduleError::Shape` if the record
/// cannot be loaded, and `ScheduleError::Pairing` for the first bad day.
pub fn parse_week(raw: &serde_json::Value, options: ReportOptions) -> Result<WeekSchedule> {
    if options.validate {
        validate(raw)?;
    }
    let input = WeekInput::from_value(raw)?;
    build_week(&input, &options)
}

/// Produce the seven-line report for a raw record.
///
/// # Errors
/// Same as [`parse_week`].
pub fn report(raw: &serde_json::Value, options: ReportOptions) -> Result<String> {
    let week = parse_week(raw, options)?;
    Ok(format_week(&week))
}

/// Produce the seven-line report for a JSON document.
///
/// # Errors
/// Returns `ScheduleError::Json` if `json` does not parse, otherwise the same
/// as [`parse_week`].
pub fn report_str(json: &str, options: ReportOptions) -> Result<String> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    report(&raw, options)
}
