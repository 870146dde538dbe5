use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use calgrid_core::dates::parse_month_key;
use calgrid_core::export::{export_filename, export_for_month, export_json};
use owo_colors::OwoColorize;

pub fn run(month: String, out: Option<PathBuf>) -> Result<()> {
    parse_month_key(&month)
        .ok_or_else(|| anyhow!("Invalid month '{month}'. Expected YYYY-MM"))?;

    let (_, _, store) = super::open_store()?;

    let events = export_for_month(&store, &month)?;
    let json = export_json(&events)?;

    let path = out
        .unwrap_or_else(|| PathBuf::from("."))
        .join(export_filename(&month));
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("Exported {} events to {}", events.len(), path.display()).green()
    );
    Ok(())
}
