use anyhow::Result;
use calgrid_core::dates::date_key;
use owo_colors::OwoColorize;

pub fn run(date: String, id: String) -> Result<()> {
    let key = date_key(super::require_date(&date)?);
    let (_, snapshot, mut store) = super::open_store()?;

    // A missing id is not an error, but the user still gets told.
    if store.delete(&key, &id) {
        super::persist(&snapshot, &store)?;
        println!("{}", format!("Deleted event {id} from {key}").green());
    } else {
        println!("{}", format!("Nothing to delete: no event {id} on {key}").dimmed());
    }
    Ok(())
}
