//! Snapshot persistence for the event store.
//!
//! The whole store is one JSON blob, loaded once at startup and written
//! back in full after every mutation. The `Snapshot` trait is the seam
//! between the pure store and the storage medium, so the store logic
//! stays testable without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::error::{CalGridError, CalGridResult};
use crate::store::{EventMap, EventStore};

/// Load/save interface injected into the store's lifecycle.
pub trait Snapshot {
    /// Read the persisted snapshot. `Ok(None)` means nothing has been
    /// saved yet (first run); an unreadable or unparsable snapshot is a
    /// `Persistence` error the caller may log and recover from.
    fn load(&self) -> CalGridResult<Option<EventMap>>;

    /// Overwrite the persisted snapshot with the full current state.
    fn save(&self, events: &EventMap) -> CalGridResult<()>;
}

/// Snapshot stored as a single JSON file on disk.
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileSnapshot {
        JsonFileSnapshot { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Snapshot for JsonFileSnapshot {
    fn load(&self) -> CalGridResult<Option<EventMap>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            CalGridError::Persistence(format!("Could not read {}: {e}", self.path.display()))
        })?;

        let map: EventMap = serde_json::from_str(&content).map_err(|e| {
            CalGridError::Persistence(format!("Could not parse {}: {e}", self.path.display()))
        })?;

        Ok(Some(map))
    }

    fn save(&self, events: &EventMap) -> CalGridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| CalGridError::Persistence(e.to_string()))?;

        // Write-then-rename keeps the snapshot whole if we die mid-write.
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// Load the store at startup, falling back to empty when nothing is
/// persisted yet. A corrupt snapshot is returned as the error so the
/// caller can log it and still start with an empty store.
pub fn load_store(snapshot: &dyn Snapshot) -> CalGridResult<EventStore> {
    match snapshot.load()? {
        Some(map) => Ok(EventStore::from_map(map)),
        None => Ok(EventStore::new()),
    }
}

/// Persist the store after a mutation.
///
/// An empty store is deliberately not written, so a populated snapshot
/// is never clobbered with nothing before the first load has happened.
pub fn save_store(snapshot: &dyn Snapshot, store: &EventStore) -> CalGridResult<()> {
    if store.is_empty() {
        return Ok(());
    }
    snapshot.save(store.as_map())
}
