//! `find-meeting` CLI — find free meeting windows in a JSON list of events.
//!
//! ## Usage
//!
//! ```sh
//! # Windows of at least 30 minutes where alice and bob are both free
//! find-meeting slots -i events.json -a alice -a bob -d 30
//!
//! # Only the earliest window, as text
//! find-meeting slots -i events.json -a alice -d 60 --first --format text
//!
//! # Merged busy blocks and free windows for a group (stdin → stdout)
//! cat events.json | find-meeting busy -a alice -a bob
//!
//! # Log query details to stderr
//! RUST_LOG=meeting_finder=trace find-meeting slots -i events.json -a alice -d 30
//! ```
//!
//! Events are a JSON array of
//! `{"name": "...", "when": {"start": 540, "end": 600}, "attendees": ["..."]}`
//! with minutes from midnight and an exclusive end.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::{Availability, Event, MeetingRequest, TimeRange};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find free meeting windows within a day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log query details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the windows where a meeting fits
    Slots {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Required attendee (repeat for several)
        #[arg(short = 'a', long = "attendee")]
        attendees: Vec<String>,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i64,
        /// Print only the earliest window
        #[arg(long)]
        first: bool,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Show the merged busy blocks and free windows of a group
    Busy {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Attendee whose events count as busy (repeat for several)
        #[arg(short = 'a', long = "attendee")]
        attendees: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Slots {
            input,
            output,
            attendees,
            duration,
            first,
            format,
        } => {
            let events = read_events(input.as_deref())?;
            let request = MeetingRequest::new(attendees, duration)
                .context("Invalid meeting request")?;

            let windows: Vec<TimeRange> = if first {
                meeting_finder::find_first_meeting_time(&events, &request)
                    .into_iter()
                    .collect()
            } else {
                meeting_finder::query(&events, &request)
            };
            info!(windows = windows.len(), "found meeting windows");

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&windows)?,
                Format::Text => render_windows(&windows),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
            format,
        } => {
            let events = read_events(input.as_deref())?;
            let attendees = attendees.into_iter().collect();
            let day = meeting_finder::availability(&events, &attendees);

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&day)?,
                Format::Text => render_availability(&day),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    let events: Vec<Event> =
        serde_json::from_str(&json).context("Failed to parse events JSON")?;
    info!(events = events.len(), "loaded events");
    Ok(events)
}

fn render_windows(windows: &[TimeRange]) -> String {
    windows
        .iter()
        .map(|w| format!("{} ({} min)\n", w, w.duration()))
        .collect()
}

fn render_availability(day: &Availability) -> String {
    let mut lines: Vec<(TimeRange, &str)> = day
        .busy
        .iter()
        .map(|r| (*r, "busy"))
        .chain(day.free.iter().map(|r| (*r, "free")))
        .collect();
    lines.sort_by(|a, b| TimeRange::order_by_start(&a.0, &b.0));

    lines
        .into_iter()
        .map(|(range, label)| format!("{label} {range} ({} min)\n", range.duration()))
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
