pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod mv;
pub mod show;

use anyhow::{Context, Result, anyhow};
use calgrid_core::EventStore;
use calgrid_core::config::CalGridConfig;
use calgrid_core::dates::parse_date_key;
use calgrid_core::storage::{JsonFileSnapshot, load_store, save_store};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Load the config and the persisted snapshot.
///
/// A corrupt snapshot is logged as a warning and the store starts empty;
/// startup never fails for persistence reasons.
pub fn open_store() -> Result<(CalGridConfig, JsonFileSnapshot, EventStore)> {
    let config = CalGridConfig::load()?;
    let snapshot = JsonFileSnapshot::new(config.events_path());

    let store = match load_store(&snapshot) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", format!("Warning: {e}; starting empty").yellow());
            EventStore::new()
        }
    };

    Ok((config, snapshot, store))
}

/// Write the snapshot back after a mutation.
pub fn persist(snapshot: &JsonFileSnapshot, store: &EventStore) -> Result<()> {
    save_store(snapshot, store)
        .with_context(|| format!("Failed to save {}", snapshot.path().display()))
}

/// Parse a user-supplied YYYY-MM-DD argument.
pub fn require_date(arg: &str) -> Result<NaiveDate> {
    parse_date_key(arg).ok_or_else(|| anyhow!("Invalid date '{arg}'. Expected YYYY-MM-DD"))
}

/// Parse a user-supplied event type, defaulting when absent.
pub fn parse_kind(arg: Option<&str>) -> Result<calgrid_core::EventType> {
    match arg {
        None => Ok(calgrid_core::EventType::Default),
        Some(s) => calgrid_core::EventType::parse(s).ok_or_else(|| {
            anyhow!("Invalid event type '{s}'. Expected default, personal, work or other")
        }),
    }
}
