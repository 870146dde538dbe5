//! Derived per-cell view of the month grid.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::dates::{date_key, month_grid};
use crate::event::Event;
use crate::store::EventStore;

/// One cell of the rendered month grid. Ephemeral: rebuilt on every
/// render from the grid and the store, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Canonical `YYYY-MM-DD` key for store lookups.
    pub date_key: String,
    /// False for the padding days borrowed from adjacent months.
    pub in_month: bool,
    pub selected: bool,
    pub today: bool,
    /// The day's events, in insertion order.
    pub events: Vec<Event>,
}

/// Build the full grid of days for a month, annotated with the store's
/// events. `today` and `selected` are passed in by the caller, so the
/// result is deterministic for its inputs.
pub fn calendar_days(
    store: &EventStore,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<CalendarDay> {
    month_grid(year, month, week_start)
        .into_iter()
        .map(|date| {
            let key = date_key(date);
            let events = store.events_on(&key).to_vec();
            CalendarDay {
                date,
                date_key: key,
                in_month: date.year() == year && date.month() == month,
                selected: selected == Some(date),
                today: date == today,
                events,
            }
        })
        .collect()
}
