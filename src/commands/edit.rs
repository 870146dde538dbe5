use anyhow::{Result, anyhow};
use calgrid_core::EventDraft;
use calgrid_core::dates::date_key;
use calgrid_core::validate::validate_draft;
use owo_colors::OwoColorize;

/// Edit an event in place. Omitted flags keep the current field values;
/// the id is never changed.
#[allow(clippy::too_many_arguments)]
pub fn run(
    date: String,
    id: String,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    kind: Option<String>,
) -> Result<()> {
    let key = date_key(super::require_date(&date)?);
    let (_, snapshot, mut store) = super::open_store()?;

    let current = store
        .events_on(&key)
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow!("No event with id '{id}' on {key}"))?
        .clone();

    let draft = EventDraft {
        title: title.unwrap_or(current.title),
        start: start.unwrap_or(current.start),
        end: end.unwrap_or(current.end),
        description: description.or(current.description),
        kind: match kind {
            Some(k) => super::parse_kind(Some(&k))?,
            None => current.kind,
        },
    };

    // The edited event's own slot is excluded from the overlap scan.
    validate_draft(&draft, store.events_on(&key), Some(&id))?;

    let event = store.edit(&key, &id, draft)?;
    super::persist(&snapshot, &store)?;

    println!("{}", format!("Updated: {} on {}", event.title, key).green());
    Ok(())
}
