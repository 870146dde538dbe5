mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Browse a month grid and manage short events stored locally")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid and a day's agenda
    Show {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Day to select and list in full (YYYY-MM-DD)
        #[arg(short, long)]
        select: Option<String>,
    },
    /// Add an event to a day
    Add {
        /// Day the event belongs to (YYYY-MM-DD)
        date: String,

        #[arg(short, long)]
        title: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM), must be after the start
        #[arg(short, long)]
        end: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Event type: default, personal, work or other
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Edit an event's fields (the id never changes)
    Edit {
        /// Day the event lives on (YYYY-MM-DD)
        date: String,

        /// Id of the event to edit
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        /// New start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Event type: default, personal, work or other
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Delete an event from a day
    Delete {
        /// Day the event lives on (YYYY-MM-DD)
        date: String,

        /// Id of the event to delete
        id: String,
    },
    /// Reschedule an event onto another day
    Move {
        /// Id of the event to move
        id: String,

        /// Destination day (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
    /// Export a month's events as JSON
    Export {
        /// Month to export (YYYY-MM)
        month: String,

        /// Directory to write events_<YYYY-MM>.json into (default: here)
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { month, select } => commands::show::run(month, select),
        Commands::Add {
            date,
            title,
            start,
            end,
            description,
            kind,
        } => commands::add::run(date, title, start, end, description, kind),
        Commands::Edit {
            date,
            id,
            title,
            start,
            end,
            description,
            kind,
        } => commands::edit::run(date, id, title, start, end, description, kind),
        Commands::Delete { date, id } => commands::delete::run(date, id),
        Commands::Move { id, to } => commands::mv::run(id, to),
        Commands::Export { month, out } => commands::export::run(month, out),
    }
}
