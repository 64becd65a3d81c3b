//! Error types for loading, validating and pairing opening hours.

use thiserror::Error;

use crate::schedule::Day;

/// Errors that can occur while turning a raw schedule into a report.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not a mapping of day to a list of `{type, value}` records.
    /// `path` points at the offending node, e.g. `monday[2].value`.
    #[error("malformed schedule at {path}: {message}")]
    Shape { path: String, message: String },

    /// A key that is not one of the seven lowercase day names.
    #[error("unknown day \"{0}\"")]
    UnknownDay(String),

    /// A day's events could not be paired into open intervals.
    #[error("invalid opening hours on {day}: {fault}")]
    Pairing { day: Day, fault: PairingFault },
}

/// Why a day's event list was rejected by the pairer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingFault {
    #[error("odd number of events ({0}), an open or close time is unmatched")]
    OddCount(usize),

    /// Position is zero-based within the sorted event list.
    #[error("expected {expected} time at position {position}, found {found} at {value}")]
    UnexpectedKind {
        position: usize,
        expected: &'static str,
        found: &'static str,
        value: u32,
    },

    #[error("close time {close} is not after open time {open}")]
    NonPositive { open: u32, close: u32 },

    #[error("unrecognized event type \"{0}\"")]
    UnknownKind(String),

    #[error("time {0} is outside of the day (0..86400)")]
    OutOfRange(u32),

    #[error("open time {0} is never closed on the following day")]
    UnclosedOvernight(u32),

    #[error("close time {0} has no open time on the previous day")]
    OrphanClose(u32),
}

/// Convenience alias used throughout opening-hours.
pub type Result<T> = std::result::Result<T, ScheduleError>;
