//! Shape check for a raw opening hours record.
//!
//! Accepts only `{ <day>: [ { "type": "open"|"close", "value": 0..=86399 }, ... ] }`
//! with lowercase day names. This is a pre-flight check on the JSON structure,
//! independent of whether the events pair up.

use serde_json::{Map, Value};

use crate::error::{Result, ScheduleError};
use crate::schedule::{Day, SECONDS_PER_DAY};

/// Validate `raw` against the opening hours record shape.
///
/// Keys are checked in document order, so the first offending key or event is
/// the one reported.
///
/// # Errors
/// Returns `ScheduleError::UnknownDay` for a key that is not a day name and
/// `ScheduleError::Shape` for any other structural problem.
///
/// # Examples
///
/// ```
/// use opening_hours::validate::validate;
/// use serde_json::json;
///
/// assert!(validate(&json!({"monday": [{"type": "open", "value": 36000}]})).is_ok());
/// assert!(validate(&json!({"funday": []})).is_err());
/// ```
pub fn validate(raw: &Value) -> Result<()> {
    let days = raw
        .as_object()
        .ok_or_else(|| shape("schedule", format!("expected an object, found {}", kind_of(raw))))?;

    for (key, events) in days {
        key.parse::<Day>()?;
        let events = events
            .as_array()
            .ok_or_else(|| shape(key, format!("expected a list, found {}", kind_of(events))))?;
        for (i, event) in events.iter().enumerate() {
            validate_event(&format!("{key}[{i}]"), event)?;
        }
    }

    Ok(())
}

fn validate_event(path: &str, event: &Value) -> Result<()> {
    let fields = event
        .as_object()
        .ok_or_else(|| shape(path, format!("expected an object, found {}", kind_of(event))))?;

    match required(fields, path, "type")? {
        Value::String(kind) if kind == "open" || kind == "close" => {}
        other => {
            return Err(shape(
                &format!("{path}.type"),
                format!("expected \"open\" or \"close\", found {other}"),
            ))
        }
    }

    let value = required(fields, path, "value")?;
    match value.as_u64() {
        Some(seconds) if seconds < u64::from(SECONDS_PER_DAY) => {}
        _ => {
            return Err(shape(
                &format!("{path}.value"),
                format!("expected an integer in 0..={}, found {value}", SECONDS_PER_DAY - 1),
            ))
        }
    }

    if let Some(extra) = fields.keys().find(|k| *k != "type" && *k != "value") {
        return Err(shape(path, format!("unexpected field \"{extra}\"")));
    }

    Ok(())
}

fn required<'a>(fields: &'a Map<String, Value>, path: &str, name: &str) -> Result<&'a Value> {
    fields
        .get(name)
        .ok_or_else(|| shape(path, format!("missing required field \"{name}\"")))
}

fn shape(path: &str, message: String) -> ScheduleError {
    ScheduleError::Shape {
        path: path.to_string(),
        message,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
