//! Drag-to-reschedule as explicit messages.
//!
//! A drag is two decoupled events: picking an event up (recording its id
//! and source day) and dropping it on a destination day (one `move_event`
//! call). Cancelling the gesture discards the picked-up id without
//! touching the store.

use crate::error::CalGridResult;
use crate::event::Event;
use crate::store::EventStore;

/// In-flight drag state. At most one event is picked up at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    picked: Option<Picked>,
}

#[derive(Debug, Clone, PartialEq)]
struct Picked {
    id: String,
    from_key: String,
}

impl DragSession {
    pub fn new() -> DragSession {
        DragSession::default()
    }

    /// Record the grabbed event. A second pick-up before a drop replaces
    /// the first (the earlier gesture never completed).
    pub fn pick_up(&mut self, id: &str, from_key: &str) {
        self.picked = Some(Picked {
            id: id.to_string(),
            from_key: from_key.to_string(),
        });
    }

    pub fn is_dragging(&self) -> bool {
        self.picked.is_some()
    }

    /// Complete the gesture: move the picked-up event to `to_key`.
    ///
    /// Invokes `move_event` exactly once per completed drop and always
    /// clears the session, including on failure. A drop with nothing
    /// picked up is `Ok(None)`.
    pub fn drop_on(
        &mut self,
        store: &mut EventStore,
        to_key: &str,
    ) -> CalGridResult<Option<Event>> {
        let Some(picked) = self.picked.take() else {
            return Ok(None);
        };
        let moved = store.move_event(&picked.from_key, to_key, &picked.id)?;
        Ok(Some(moved))
    }

    /// Abandon the gesture without a drop.
    pub fn cancel(&mut self) {
        self.picked = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalGridError;
    use crate::event::{EventDraft, EventType};

    fn make_store_with_event() -> (EventStore, Event) {
        let mut store = EventStore::new();
        let event = store.add(
            "2024-12-01",
            EventDraft {
                title: "Gym".to_string(),
                start: "18:00".to_string(),
                end: "19:00".to_string(),
                description: None,
                kind: EventType::Personal,
            },
        );
        (store, event)
    }

    #[test]
    fn test_pick_up_then_drop_moves_once() {
        let (mut store, event) = make_store_with_event();
        let mut drag = DragSession::new();

        drag.pick_up(&event.id, "2024-12-01");
        assert!(drag.is_dragging());

        let moved = drag.drop_on(&mut store, "2024-12-08").unwrap().unwrap();
        assert_eq!(moved.id, event.id);
        assert!(!drag.is_dragging());
        assert_eq!(store.events_on("2024-12-08").len(), 1);
        assert!(store.events_on("2024-12-01").is_empty());

        // The gesture is finished; a stray second drop does nothing.
        assert!(drag.drop_on(&mut store, "2024-12-09").unwrap().is_none());
        assert!(store.events_on("2024-12-09").is_empty());
    }

    #[test]
    fn test_cancel_discards_without_moving() {
        let (mut store, event) = make_store_with_event();
        let mut drag = DragSession::new();

        drag.pick_up(&event.id, "2024-12-01");
        drag.cancel();

        assert!(!drag.is_dragging());
        assert!(drag.drop_on(&mut store, "2024-12-08").unwrap().is_none());
        assert_eq!(store.events_on("2024-12-01").len(), 1);
    }

    #[test]
    fn test_drop_without_pick_up_is_ignored() {
        let (mut store, _) = make_store_with_event();
        let mut drag = DragSession::new();
        assert!(drag.drop_on(&mut store, "2024-12-08").unwrap().is_none());
    }

    #[test]
    fn test_failed_drop_clears_the_session() {
        let (mut store, _) = make_store_with_event();
        let mut drag = DragSession::new();

        drag.pick_up("no-such-id", "2024-12-01");
        let err = drag.drop_on(&mut store, "2024-12-08").unwrap_err();
        assert!(matches!(err, CalGridError::NotFound { .. }));
        assert!(!drag.is_dragging());
    }
}
