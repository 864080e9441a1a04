//! Atrium CLI entry point.

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use atrium::{Config, Snapshot};

mod cli;

/// Atrium: room-booking schedule analysis
#[derive(Parser, Debug)]
#[command(name = "atrium")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the JSON record snapshot (overrides config)
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a natural-language question about rooms and schedules
    Ask {
        /// The question (e.g., "show empty slots for room 101")
        query: String,
    },
    /// Show usable free slots for a room
    Slots {
        /// Room name
        room: String,
        /// Target day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Minimum slot duration in minutes (default from config)
        #[arg(long)]
        min_minutes: Option<i64>,
    },
    /// Show an instructor's sessions and conflicts for a day
    Instructor {
        /// Instructor name (substring match)
        name: String,
        /// Target day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Find rooms free for a whole time window
    Rooms {
        /// Window start (e.g., 2026-03-02T09:00:00)
        #[arg(long)]
        start: NaiveDateTime,
        /// Window end
        #[arg(long)]
        end: NaiveDateTime,
        /// Minimum capacity
        #[arg(long)]
        capacity: Option<u32>,
        /// Required facility tag (repeatable)
        #[arg(long = "facility")]
        facilities: Vec<String>,
    },
    /// Free-text room search
    Search {
        /// Search text
        query: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> atrium::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    let data_path = args
        .data
        .as_deref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.data_path());
    let records = Snapshot::from_file(&data_path)?;
    tracing::debug!(
        rooms = records.rooms.len(),
        schedules = records.schedules.len(),
        "loaded snapshot from {}",
        data_path.display()
    );

    match args.command {
        Command::Ask { query } => cli::commands::ask(&records, &query),
        Command::Slots {
            room,
            date,
            min_minutes,
        } => cli::commands::slots(
            &records,
            &room,
            date,
            min_minutes.unwrap_or(config.query.min_slot_minutes),
            args.json,
        ),
        Command::Instructor { name, date } => {
            cli::commands::instructor(&records, &name, date, args.json)
        }
        Command::Rooms {
            start,
            end,
            capacity,
            facilities,
        } => cli::commands::rooms(&records, start, end, capacity, &facilities, args.json),
        Command::Search { query } => cli::commands::search(&records, &query, args.json),
    }
}
