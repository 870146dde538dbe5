//! Calendar event types.
//!
//! `Event` mirrors the persisted JSON shape exactly: `start` and `end` are
//! zero-padded `HH:MM` wall-clock strings, parsed into `chrono` times only
//! where ordering matters (see `validate`).

use serde::{Deserialize, Serialize};

/// A short same-day calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-wide unique id, assigned at creation and never changed.
    pub id: String,
    pub title: String,
    /// Wall-clock start, `HH:MM`.
    pub start: String,
    /// Wall-clock end, `HH:MM`. Always strictly after `start`.
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EventType,
}

/// Event category, used by the UI for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Default,
    Personal,
    Work,
    Other,
}

impl EventType {
    /// Parse a user-supplied type name ("work", "personal", ...).
    pub fn parse(s: &str) -> Option<EventType> {
        match s {
            "default" => Some(EventType::Default),
            "personal" => Some(EventType::Personal),
            "work" => Some(EventType::Work),
            "other" => Some(EventType::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Default => "default",
            EventType::Personal => "personal",
            EventType::Work => "work",
            EventType::Other => "other",
        }
    }
}

/// An event's caller-supplied fields, without an id.
///
/// Used for both create and edit: the store assigns or preserves the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub start: String,
    pub end: String,
    pub description: Option<String>,
    pub kind: EventType,
}

impl EventDraft {
    /// Attach an id, producing a full event.
    pub(crate) fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            start: self.start,
            end: self.end,
            description: self.description,
            kind: self.kind,
        }
    }
}
