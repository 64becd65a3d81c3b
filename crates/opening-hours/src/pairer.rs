//! Pair one day's raw open/close events into sorted open intervals.
//!
//! Events arrive unsorted. They are ordered by time, with a close sorting
//! before an open at the same instant, and then consumed strictly as
//! open, close, open, close, ... Any deviation rejects the whole day.
//! An open that coincides with the previous close continues that interval.

use crate::error::PairingFault;
use crate::schedule::{Event, EventKind, Interval, SECONDS_PER_DAY};

/// A day's pairing when closes may spill over from, or into, a neighbouring day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayPairing {
    /// A leading close that belongs to an open on the previous day.
    pub carried_close: Option<u32>,
    /// Intervals fully contained in this day.
    pub intervals: Vec<Interval>,
    /// A trailing open that is closed on the following day.
    pub pending_open: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Open(u32),
    Close(u32),
}

impl Edge {
    fn value(self) -> u32 {
        match self {
            Edge::Open(v) | Edge::Close(v) => v,
        }
    }

    /// Tie-break at equal times: closes first.
    fn rank(self) -> u8 {
        match self {
            Edge::Close(_) => 0,
            Edge::Open(_) => 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Edge::Open(_) => "open",
            Edge::Close(_) => "close",
        }
    }
}

/// Pair a day's events into intervals that all start and end within the day.
///
/// # Errors
/// Returns a [`PairingFault`] if any event has an unrecognized type or a time
/// outside of the day, if the count is odd, if the sorted events do not
/// alternate open/close starting with open, or if a close is not strictly
/// after its open.
///
/// # Examples
///
/// ```
/// use opening_hours::pairer::pair;
/// use opening_hours::schedule::{Event, Interval};
///
/// let events = [Event::close(64800), Event::open(36000)];
/// assert_eq!(pair(&events).unwrap(), vec![Interval { start: 36000, end: 64800 }]);
/// ```
pub fn pair(events: &[Event]) -> Result<Vec<Interval>, PairingFault> {
    let edges = sorted_edges(events)?;
    pair_sorted(&edges, 0)
}

/// Like [`pair`], but a leading close and a trailing open are set aside
/// instead of being rejected, so they can be linked with the neighbouring days.
///
/// # Errors
/// Same as [`pair`] for the events between the carried close and the pending open.
pub fn pair_overnight(events: &[Event]) -> Result<DayPairing, PairingFault> {
    let edges = sorted_edges(events)?;
    let mut middle = edges.as_slice();
    let mut offset = 0;

    let carried_close = match middle.first() {
        Some(Edge::Close(value)) => {
            middle = &middle[1..];
            offset = 1;
            Some(*value)
        }
        _ => None,
    };
    let pending_open = match middle.last() {
        Some(Edge::Open(value)) => {
            middle = &middle[..middle.len() - 1];
            Some(*value)
        }
        _ => None,
    };

    Ok(DayPairing {
        carried_close,
        intervals: pair_sorted(middle, offset)?,
        pending_open,
    })
}

/// Check kinds and ranges, then sort by time and kind.
fn sorted_edges(events: &[Event]) -> Result<Vec<Edge>, PairingFault> {
    let mut edges = events
        .iter()
        .map(|event| {
            if event.value >= SECONDS_PER_DAY {
                return Err(PairingFault::OutOfRange(event.value));
            }
            match &event.kind {
                EventKind::Open => Ok(Edge::Open(event.value)),
                EventKind::Close => Ok(Edge::Close(event.value)),
                EventKind::Unknown(other) => Err(PairingFault::UnknownKind(other.clone())),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    edges.sort_by_key(|edge| (edge.value(), edge.rank()));
    Ok(edges)
}

/// Walk sorted edges in (open, close) pairs. `offset` is only used to report
/// positions relative to the full sorted day.
fn pair_sorted(edges: &[Edge], offset: usize) -> Result<Vec<Interval>, PairingFault> {
    if edges.len() % 2 != 0 {
        return Err(PairingFault::OddCount(edges.len()));
    }

    let mut intervals: Vec<Interval> = Vec::with_capacity(edges.len() / 2);
    for (i, pair) in edges.chunks_exact(2).enumerate() {
        let position = offset + i * 2;
        let (start, end) = match (pair[0], pair[1]) {
            (Edge::Open(start), Edge::Close(end)) => (start, end),
            // Sorted closes-first, so `open t, close t` arrives as `close t, open t`.
            (Edge::Close(close), Edge::Open(open)) if close == open => {
                return Err(PairingFault::NonPositive { open, close })
            }
            (Edge::Open(_), unexpected) => {
                return Err(PairingFault::UnexpectedKind {
                    position: position + 1,
                    expected: "close",
                    found: unexpected.name(),
                    value: unexpected.value(),
                })
            }
            (unexpected, _) => {
                return Err(PairingFault::UnexpectedKind {
                    position,
                    expected: "open",
                    found: unexpected.name(),
                    value: unexpected.value(),
                })
            }
        };

        if end <= start {
            return Err(PairingFault::NonPositive {
                open: start,
                close: end,
            });
        }

        // An open at the previous close continues the same interval.
        match intervals.last_mut() {
            Some(last) if last.end == start => last.end = end,
            _ => intervals.push(Interval { start, end }),
        }
    }

    Ok(intervals)
}
