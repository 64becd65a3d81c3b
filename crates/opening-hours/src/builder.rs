//! Build a full [`WeekSchedule`] from raw per-day events.
//!
//! Every day in [`Day::ALL`] is visited regardless of which keys the input
//! contains. Missing days are closed. In overnight mode, a day ending on an
//! open is closed by the leading close of the next day, wrapping Sunday to
//! Monday.

use tracing::{debug, warn};

use crate::error::{PairingFault, Result, ScheduleError};
use crate::options::ReportOptions;
use crate::pairer::{pair, pair_overnight, DayPairing};
use crate::schedule::{Day, Interval, WeekInput, WeekSchedule, SECONDS_PER_DAY};

/// Pair every day of `input` and collect the results in canonical order.
///
/// Keys that are not day names are ignored here; run
/// [`validate`](crate::validate::validate) first to reject them.
///
/// # Errors
/// Returns `ScheduleError::Pairing` for the first day (Monday first) whose
/// events cannot be paired.
pub fn build_week(input: &WeekInput, options: &ReportOptions) -> Result<WeekSchedule> {
    for key in input.unknown_keys() {
        warn!(key, "ignoring unknown day key");
    }

    if options.overnight {
        build_overnight(input)
    } else {
        build_strict(input)
    }
}

fn build_strict(input: &WeekInput) -> Result<WeekSchedule> {
    let mut week = WeekSchedule::closed();
    for day in Day::ALL {
        let intervals =
            pair(input.events(day)).map_err(|fault| ScheduleError::Pairing { day, fault })?;
        log_paired_day(day, &intervals);
        week.get_mut(day).intervals = intervals;
    }
    Ok(week)
}

fn build_overnight(input: &WeekInput) -> Result<WeekSchedule> {
    let pairings = Day::ALL
        .into_iter()
        .map(|day| {
            pair_overnight(input.events(day)).map_err(|fault| ScheduleError::Pairing { day, fault })
        })
        .collect::<Result<Vec<DayPairing>>>()?;

    let mut week = WeekSchedule::closed();
    for day in Day::ALL {
        let pairing = &pairings[day.index()];

        if let Some(close) = pairing.carried_close {
            if pairings[day.previous().index()].pending_open.is_none() {
                return Err(ScheduleError::Pairing {
                    day,
                    fault: PairingFault::OrphanClose(close),
                });
            }
        }

        let mut intervals = pairing.intervals.clone();
        if let Some(start) = pairing.pending_open {
            let close = pairings[day.next().index()]
                .carried_close
                .ok_or(ScheduleError::Pairing {
                    day,
                    fault: PairingFault::UnclosedOvernight(start),
                })?;
            let end = close + SECONDS_PER_DAY;
            match intervals.last_mut() {
                Some(last) if last.end == start => last.end = end,
                _ => intervals.push(Interval { start, end }),
            }
            debug!(day = day.name(), start, close, "linked overnight interval");
        }

        log_paired_day(day, &intervals);
        week.get_mut(day).intervals = intervals;
    }
    Ok(week)
}

fn log_paired_day(day: Day, intervals: &[Interval]) {
    let open_seconds: u32 = intervals.iter().map(Interval::duration_seconds).sum();
    let overnight = intervals.iter().any(Interval::crosses_midnight);
    debug!(
        day = day.name(),
        intervals = intervals.len(),
        open_seconds,
        overnight,
        "paired day"
    );
}
