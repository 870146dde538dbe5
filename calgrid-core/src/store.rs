//! The event store: an ordered mapping from date-key to the day's events.
//!
//! Mutations require `&mut self`; the store is exclusively owned by its
//! caller and all operations run to completion (no internal locking).
//! Validation (time order, overlap) happens *before* `add`/`edit`; see
//! the `validate` module.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::error::{CalGridError, CalGridResult};
use crate::event::{Event, EventDraft};

/// The persisted snapshot shape: every date-key with its events, keys
/// ascending. A date-key with no events is absent rather than empty.
pub type EventMap = BTreeMap<String, Vec<Event>>;

/// In-memory event store, keyed by `YYYY-MM-DD` date-key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: EventMap,
}

impl EventStore {
    pub fn new() -> EventStore {
        EventStore::default()
    }

    /// Rebuild a store from a loaded snapshot, dropping empty entries so
    /// the "empty vec == absent key" invariant holds from the start.
    pub fn from_map(map: EventMap) -> EventStore {
        let events = map.into_iter().filter(|(_, v)| !v.is_empty()).collect();
        EventStore { events }
    }

    /// The snapshot to persist.
    pub fn as_map(&self) -> &EventMap {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// The events on a day, in insertion order. Empty slice for a day with
    /// no events.
    pub fn events_on(&self, date_key: &str) -> &[Event] {
        self.events.get(date_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Locate an event anywhere in the store by id alone.
    ///
    /// Returns the date-key it currently lives under together with the
    /// event. Ids are unique store-wide, so at most one match exists.
    pub fn find(&self, id: &str) -> Option<(&str, &Event)> {
        self.events.iter().find_map(|(key, events)| {
            events
                .iter()
                .find(|e| e.id == id)
                .map(|e| (key.as_str(), e))
        })
    }

    /// Add a validated draft under `date_key`, assigning a fresh unique id.
    ///
    /// Never fails for a structurally valid draft; overlap and time-order
    /// checks are the caller's responsibility, before this call.
    pub fn add(&mut self, date_key: &str, draft: EventDraft) -> Event {
        let event = draft.into_event(Uuid::new_v4().to_string());
        self.events
            .entry(date_key.to_string())
            .or_default()
            .push(event.clone());
        event
    }

    /// Replace the fields of the event with `id` under `date_key`. The id
    /// and the event's position in the day's list are preserved.
    pub fn edit(&mut self, date_key: &str, id: &str, draft: EventDraft) -> CalGridResult<Event> {
        let slot = self
            .events
            .get_mut(date_key)
            .and_then(|events| events.iter_mut().find(|e| e.id == id))
            .ok_or_else(|| not_found(date_key, id))?;

        *slot = draft.into_event(id.to_string());
        Ok(slot.clone())
    }

    /// Remove the event with `id` from `date_key`. A missing id is a
    /// silent no-op rather than an error; returns whether anything was
    /// removed so callers can still tell the user.
    pub fn delete(&mut self, date_key: &str, id: &str) -> bool {
        let Some(events) = self.events.get_mut(date_key) else {
            return false;
        };
        let before = events.len();
        events.retain(|e| e.id != id);
        let removed = events.len() < before;

        if events.is_empty() {
            self.events.remove(date_key);
        }
        removed
    }

    /// Move the event with `id` from `from_key` to the end of `to_key`'s
    /// list, preserving all other fields.
    ///
    /// Fails with `NotFound` (leaving `to_key` untouched) if `from_key`
    /// has no such event. `from_key == to_key` is safe: the event is
    /// removed before it is re-appended, so it is neither duplicated nor
    /// dropped, it just ends up last on the day.
    pub fn move_event(&mut self, from_key: &str, to_key: &str, id: &str) -> CalGridResult<Event> {
        let events = self
            .events
            .get_mut(from_key)
            .ok_or_else(|| not_found(from_key, id))?;
        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(from_key, id))?;

        let event = events.remove(index);
        if events.is_empty() {
            self.events.remove(from_key);
        }

        self.events
            .entry(to_key.to_string())
            .or_default()
            .push(event.clone());
        Ok(event)
    }
}

fn not_found(date_key: &str, id: &str) -> CalGridError {
    CalGridError::NotFound {
        date_key: date_key.to_string(),
        id: id.to_string(),
    }
}
