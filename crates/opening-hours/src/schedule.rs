//! Schedule data model: days, raw events, resolved intervals and the week.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Number of seconds in one calendar day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// One of the seven canonical weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in report order, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The lowercase key used in the input record.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// The capitalized name used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Zero-based position in [`Day::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The following day, wrapping Sunday to Monday.
    pub fn next(self) -> Day {
        Day::ALL[(self.index() + 1) % 7]
    }

    /// The preceding day, wrapping Monday to Sunday.
    pub fn previous(self) -> Day {
        Day::ALL[(self.index() + 6) % 7]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    /// Only the lowercase keys are accepted, matching the input record format.
    fn from_str(s: &str) -> Result<Self> {
        Day::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| ScheduleError::UnknownDay(s.to_string()))
    }
}

/// The `type` of a raw event.
///
/// Unrecognized strings are kept rather than rejected at load time so the
/// pairer can report them against the day they appear on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Open,
    Close,
    Unknown(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Open => "open",
            EventKind::Close => "close",
            EventKind::Unknown(other) => other,
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => EventKind::Open,
            "close" => EventKind::Close,
            _ => EventKind::Unknown(s),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

/// A single open or close time, in seconds since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub value: u32,
}

impl Event {
    pub fn open(value: u32) -> Self {
        Self {
            kind: EventKind::Open,
            value,
        }
    }

    pub fn close(value: u32) -> Self {
        Self {
            kind: EventKind::Close,
            value,
        }
    }
}

/// A resolved open period. `start < end` always holds.
///
/// An interval that closes on the following day stores `end` past
/// [`SECONDS_PER_DAY`] (close time + 86400).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn duration_seconds(&self) -> u32 {
        self.end - self.start
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end > SECONDS_PER_DAY
    }
}

/// The intervals for one day, sorted by start and never overlapping or touching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub day: Day,
    pub intervals: Vec<Interval>,
}

impl DaySchedule {
    pub fn closed(day: Day) -> Self {
        Self {
            day,
            intervals: Vec::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// All seven [`DaySchedule`]s, always in [`Day::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: [DaySchedule; 7],
}

impl WeekSchedule {
    /// A week where every day is closed.
    pub fn closed() -> Self {
        Self {
            days: Day::ALL.map(DaySchedule::closed),
        }
    }

    pub fn get(&self, day: Day) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub(crate) fn get_mut(&mut self, day: Day) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    /// Iterate Monday through Sunday.
    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter()
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::closed()
    }
}

/// The raw input record: day to unsorted, unpaired events.
///
/// Keys that do not name a day are kept only by name, whatever their value,
/// so that loading never fails on them; only validation rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekInput {
    days: BTreeMap<Day, Vec<Event>>,
    unknown: Vec<String>,
}

impl WeekInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns `ScheduleError::Shape` if the value is not an object, or if a
    /// day's value is not a list of `{type, value}` records with a
    /// non-negative integer value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| ScheduleError::Shape {
            path: "schedule".to_string(),
            message: "expected an object of day lists".to_string(),
        })?;

        let mut input = Self::new();
        for (key, events) in fields {
            match key.parse::<Day>() {
                Ok(day) => {
                    let events = Vec::<Event>::deserialize(events).map_err(|e| {
                        ScheduleError::Shape {
                            path: key.clone(),
                            message: e.to_string(),
                        }
                    })?;
                    input.days.insert(day, events);
                }
                Err(_) => input.unknown.push(key.clone()),
            }
        }
        Ok(input)
    }

    /// Builder-style setter, replacing any events already given for `day`.
    pub fn with_day(mut self, day: Day, events: Vec<Event>) -> Self {
        self.days.insert(day, events);
        self
    }

    /// Events for `day`, empty when the day is absent.
    pub fn events(&self, day: Day) -> &[Event] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys that do not name a day, in input order.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.iter().map(String::as_str)
    }
}
