use anyhow::{Result, anyhow};
use calgrid_core::dates::{date_key, parse_month_key};
use calgrid_core::day::calendar_days;
use chrono::Datelike;
use owo_colors::OwoColorize;

use crate::render::{self, Render};

pub fn run(month: Option<String>, select: Option<String>) -> Result<()> {
    let (config, _, store) = super::open_store()?;
    let week_start = config.week_start()?;
    let today = chrono::Local::now().date_naive();

    let (year, month_num) = match month {
        Some(m) => {
            parse_month_key(&m).ok_or_else(|| anyhow!("Invalid month '{m}'. Expected YYYY-MM"))?
        }
        None => (today.year(), today.month()),
    };
    let selected = select.as_deref().map(super::require_date).transpose()?;

    let days = calendar_days(&store, year, month_num, selected, today, week_start);
    print!("{}", render::render_month(&days, year, month_num));

    if let Some(selected) = selected {
        let key = date_key(selected);
        let events = store.events_on(&key);

        println!();
        println!("{}", key.bold());
        if events.is_empty() {
            println!("  {}", "No events".dimmed());
        }
        for event in events {
            println!("  {}", event.render());
        }
    }

    Ok(())
}
