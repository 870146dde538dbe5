//! Month-filtered JSON export.
//!
//! Selects every event whose date-key falls inside a `YYYY-MM` month-key
//! and serializes them for the "save as file" side effect, which the
//! caller owns (the CLI writes the file; the core only produces content).

use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;
use crate::store::EventStore;

/// All events of the month, concatenated in date-key ascending order
/// (the store's map is ordered, so iteration order is the output order).
///
/// Fails with `EmptyResult` when the month has no events; callers surface
/// that to the user rather than writing an empty file.
pub fn export_for_month(store: &EventStore, month_key: &str) -> CalGridResult<Vec<Event>> {
    let prefix = format!("{month_key}-");

    let events: Vec<Event> = store
        .as_map()
        .iter()
        .filter(|(key, _)| key.starts_with(&prefix))
        .flat_map(|(_, events)| events.iter().cloned())
        .collect();

    if events.is_empty() {
        return Err(CalGridError::EmptyResult(month_key.to_string()));
    }
    Ok(events)
}

/// Pretty-printed JSON array of events, as written to the export file.
pub fn export_json(events: &[Event]) -> CalGridResult<String> {
    serde_json::to_string_pretty(events).map_err(|e| CalGridError::Persistence(e.to_string()))
}

/// Filename for a month's export: `events_<YYYY-MM>.json`.
pub fn export_filename(month_key: &str) -> String {
    format!("events_{month_key}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, EventType};

    fn make_draft(title: &str, start: &str, end: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            description: None,
            kind: EventType::Default,
        }
    }

    fn make_store() -> EventStore {
        let mut store = EventStore::new();
        store.add("2024-11-30", make_draft("November", "09:00", "10:00"));
        store.add("2024-12-17", make_draft("Lunch", "12:00", "13:00"));
        store.add("2024-12-02", make_draft("Standup", "09:00", "09:15"));
        store
    }

    #[test]
    fn test_export_filters_by_month_in_date_order() {
        let events = export_for_month(&make_store(), "2024-12").unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Standup", "Lunch"]);
    }

    #[test]
    fn test_export_empty_month_fails() {
        let mut store = EventStore::new();
        store.add("2024-11-05", make_draft("November only", "09:00", "10:00"));
        store.add("2024-11-20", make_draft("Still November", "11:00", "12:00"));

        let err = export_for_month(&store, "2024-12").unwrap_err();
        assert!(matches!(err, CalGridError::EmptyResult(_)));
    }

    #[test]
    fn test_export_does_not_match_key_prefixes_loosely() {
        let mut store = EventStore::new();
        store.add("2024-11-05", make_draft("A", "09:00", "10:00"));
        // "2024-1" must not match November via plain prefix logic.
        let err = export_for_month(&store, "2024-1").unwrap_err();
        assert!(matches!(err, CalGridError::EmptyResult(_)));
    }

    #[test]
    fn test_export_json_is_a_pretty_array() {
        let events = export_for_month(&make_store(), "2024-12").unwrap();
        let json = export_json(&events).unwrap();
        assert!(json.starts_with("[\n"));

        let parsed: Vec<Event> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, events);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("2024-12"), "events_2024-12.json");
    }
}
