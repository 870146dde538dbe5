//! Draft validation: time-order and overlap rules.
//!
//! Both `start` and `end` are wall-clock `HH:MM` strings. They are
//! resolved as `NaiveTime` values, which anchors them to one shared
//! (arbitrary) reference date: only time-of-day ordering matters, and no
//! ambient clock is consulted.

use chrono::NaiveTime;

use crate::error::{CalGridError, CalGridResult};
use crate::event::{Event, EventDraft};

/// Validate a draft against the other events on the same day.
///
/// Runs two checks in order:
/// 1. `start`/`end` must parse as `HH:MM` and satisfy `start < end`,
///    otherwise `InvalidRange`;
/// 2. the half-open range `[start, end)` must not intersect any other
///    event's range on the day, otherwise `Overlap` naming the first
///    conflicting event. Touching endpoints (`end == other.start`) are
///    allowed; containment and identical ranges are not.
///
/// `editing` excludes the event currently being edited from the scan so
/// it cannot conflict with itself. Only on `Ok` may the caller proceed to
/// `add`/`edit`.
pub fn validate_draft(
    draft: &EventDraft,
    same_day: &[Event],
    editing: Option<&str>,
) -> CalGridResult<(NaiveTime, NaiveTime)> {
    let start = parse_time(&draft.start)?;
    let end = parse_time(&draft.end)?;

    if end <= start {
        return Err(CalGridError::InvalidRange(format!(
            "{} does not end after {}",
            draft.end, draft.start
        )));
    }

    for other in same_day {
        if editing == Some(other.id.as_str()) {
            continue;
        }
        // Stored events were validated on the way in; one that no longer
        // parses cannot be meaningfully compared, so it cannot conflict.
        let (Ok(other_start), Ok(other_end)) = (parse_time(&other.start), parse_time(&other.end))
        else {
            continue;
        };

        if start < other_end && other_start < end {
            return Err(CalGridError::Overlap {
                title: other.title.clone(),
                start: other.start.clone(),
                end: other.end.clone(),
            });
        }
    }

    Ok((start, end))
}

/// Parse an `HH:MM` wall-clock string.
pub fn parse_time(s: &str) -> CalGridResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| CalGridError::InvalidRange(format!("'{}' is not a HH:MM time", s)))
}
