use anyhow::Result;
use calgrid_core::EventDraft;
use calgrid_core::dates::date_key;
use calgrid_core::validate::validate_draft;
use owo_colors::OwoColorize;

pub fn run(
    date: String,
    title: String,
    start: String,
    end: String,
    description: Option<String>,
    kind: Option<String>,
) -> Result<()> {
    let key = date_key(super::require_date(&date)?);
    let draft = EventDraft {
        title,
        start,
        end,
        description,
        kind: super::parse_kind(kind.as_deref())?,
    };

    let (_, snapshot, mut store) = super::open_store()?;

    // Time order and overlap are checked before the store is touched.
    validate_draft(&draft, store.events_on(&key), None)?;

    let event = store.add(&key, draft);
    super::persist(&snapshot, &store)?;

    println!(
        "{} {}",
        format!("Created: {} on {}", event.title, key).green(),
        format!("({})", event.id).dimmed()
    );
    Ok(())
}
