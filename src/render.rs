//! Terminal rendering for the month grid and events.
//!
//! Extension-trait rendering with owo_colors: events are colored by type,
//! grid cells by their day flags (today, selected, padding days).

use calgrid_core::day::CalendarDay;
use calgrid_core::event::{Event, EventType};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start, self.end);
        let tag = format!("[{}]", self.kind.as_str());
        let tag = match self.kind {
            EventType::Default => tag.dimmed().to_string(),
            EventType::Personal => tag.cyan().to_string(),
            EventType::Work => tag.yellow().to_string(),
            EventType::Other => tag.magenta().to_string(),
        };

        let id = format!("({})", self.id);
        format!("{} {} {} {}", time.dimmed(), self.title, tag, id.dimmed())
    }
}

/// Render the month grid: a title line, a weekday header, and one row per
/// week. Each cell shows the day number, a `*` when the day has events,
/// brackets around the selected day; today is highlighted, padding days
/// from adjacent months are dimmed.
pub fn render_month(days: &[CalendarDay], year: i32, month: u32) -> String {
    let mut out = String::new();

    let title = month_title(year, month);
    out.push_str(&format!("{}\n", title.bold()));
    out.push_str(&weekday_header(days));
    out.push('\n');

    for week in days.chunks(7) {
        for day in week {
            out.push_str(&render_cell(day));
        }
        out.push('\n');
    }

    out
}

fn month_title(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => format!("{year}-{month:02}"),
    }
}

/// Weekday abbreviations in grid order (the grid already starts on the
/// configured first day of the week).
fn weekday_header(days: &[CalendarDay]) -> String {
    days.iter()
        .take(7)
        .map(|d| format!("{:>4} ", d.date.format("%a").to_string()))
        .collect()
}

fn render_cell(day: &CalendarDay) -> String {
    let number = day.date.day();
    let marker = if day.events.is_empty() { ' ' } else { '*' };

    // Pad before coloring; color codes would break the column width.
    let text = if day.selected {
        format!("[{number:>2}{marker}]")
    } else {
        format!(" {number:>2}{marker} ")
    };

    if day.today {
        text.reversed().to_string()
    } else if !day.in_month {
        text.dimmed().to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::EventStore;
    use calgrid_core::day::calendar_days;
    use calgrid_core::event::EventDraft;
    use chrono::Weekday;

    fn make_days() -> Vec<CalendarDay> {
        let mut store = EventStore::new();
        store.add(
            "2024-12-17",
            EventDraft {
                title: "Lunch".to_string(),
                start: "12:00".to_string(),
                end: "13:00".to_string(),
                description: None,
                kind: EventType::Default,
            },
        );
        let today = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        calendar_days(&store, 2024, 12, None, today, Weekday::Sun)
    }

    #[test]
    fn test_render_month_has_header_and_week_rows() {
        let days = make_days();
        let rendered = render_month(&days, 2024, 12);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].contains("December 2024"));
        assert!(lines[1].contains("Sun"));
        // Title + header + one line per week.
        assert_eq!(lines.len(), 2 + days.len() / 7);
    }

    #[test]
    fn test_event_marker_shows_on_busy_days() {
        let days = make_days();
        let busy = days.iter().find(|d| d.date_key == "2024-12-17").unwrap();
        assert!(render_cell(busy).contains("17*"));

        let free = days.iter().find(|d| d.date_key == "2024-12-18").unwrap();
        assert!(!render_cell(free).contains('*'));
    }
}
