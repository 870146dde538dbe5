use anyhow::{Result, anyhow};
use calgrid_core::dates::date_key;
use calgrid_core::drag::DragSession;
use owo_colors::OwoColorize;

/// Reschedule an event onto another day.
///
/// The CLI analogue of drag-to-reschedule: the id alone identifies the
/// event (its current day is looked up, like a drag start capturing the
/// id), and the destination date completes the drop.
pub fn run(id: String, to: String) -> Result<()> {
    let to_key = date_key(super::require_date(&to)?);
    let (_, snapshot, mut store) = super::open_store()?;

    let (from_key, _) = store
        .find(&id)
        .ok_or_else(|| anyhow!("No event with id '{id}'"))?;
    let from_key = from_key.to_string();

    let mut drag = DragSession::new();
    drag.pick_up(&id, &from_key);
    let moved = drag
        .drop_on(&mut store, &to_key)?
        .ok_or_else(|| anyhow!("No event with id '{id}'"))?;

    super::persist(&snapshot, &store)?;

    println!(
        "{}",
        format!("Moved: {} from {} to {}", moved.title, from_key, to_key).green()
    );
    Ok(())
}
