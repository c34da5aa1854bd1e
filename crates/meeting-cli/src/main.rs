//! `find-meeting` CLI — find free meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for the request stored in the input (stdin → stdout)
//! cat team.json | find-meeting query
//!
//! # Override the request from the command line
//! find-meeting query -i team.json --attendee alice --attendee bob --duration 60
//!
//! # Try to fit optional attendees in as well
//! find-meeting query -i team.json --optional carol --with-optional
//!
//! # Machine-readable output
//! find-meeting query -i team.json --format json -o slots.json
//!
//! # Merged busy blocks of the request attendees
//! find-meeting busy -i team.json
//! ```
//!
//! Input is a JSON object with an `events` array and an optional `request`:
//!
//! ```json
//! {
//!   "events": [{"name": "Lunch", "when": {"start": 720, "end": 780}, "attendees": ["alice"]}],
//!   "request": {"attendees": ["alice"], "optional_attendees": [], "duration": 30}
//! }
//! ```

mod input;
mod log;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use meeting_engine::day::format_clock;
use meeting_engine::{busy_blocks, find_meeting_times, find_meeting_times_with_optional, TimeRange};
use tracing::info;

use crate::input::{build_request, parse_schedule, read_input, write_output, RequestOverrides};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find free meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log query decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the free slots that fit the meeting request
    Query {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        request: RequestArgs,
        /// Prefer slots where optional attendees can join too
        #[arg(long)]
        with_optional: bool,
    },
    /// List the merged busy blocks of the request attendees
    Busy {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        request: RequestArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Args)]
struct RequestArgs {
    /// Mandatory attendee (repeatable, replaces the input's attendees)
    #[arg(long = "attendee")]
    attendees: Vec<String>,
    /// Optional attendee (repeatable, replaces the input's optional attendees)
    #[arg(long = "optional")]
    optional: Vec<String>,
    /// Meeting length in minutes (replaces the input's duration)
    #[arg(long)]
    duration: Option<u32>,
}

impl From<RequestArgs> for RequestOverrides {
    fn from(args: RequestArgs) -> Self {
        RequestOverrides {
            attendees: args.attendees,
            optional: args.optional,
            duration: args.duration,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log::init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            io,
            request,
            with_optional,
        } => {
            let schedule = parse_schedule(&read_input(io.input.as_deref())?)?;
            let request = build_request(schedule.request, request.into())?;

            let slots = if with_optional {
                find_meeting_times_with_optional(&schedule.events, &request)
            } else {
                find_meeting_times(&schedule.events, &request)
            };
            info!(slots = slots.len(), "query complete");

            let rendered = render(&slots, io.format, "No available slots")?;
            write_output(io.output.as_deref(), &rendered)?;
        }
        Commands::Busy { io, request } => {
            let schedule = parse_schedule(&read_input(io.input.as_deref())?)?;
            let overrides: RequestOverrides = request.into();
            // Only the attendees matter here, so a missing duration is fine.
            let overrides = RequestOverrides {
                duration: overrides.duration.or(Some(0)),
                ..overrides
            };
            let request = build_request(schedule.request, overrides)?;

            let blocks = busy_blocks(&schedule.events, &request.attendees);
            let rendered = render(&blocks, io.format, "No busy time")?;
            write_output(io.output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Render ranges as `HH:MM-HH:MM (N min)` lines or as a JSON array.
fn render(ranges: &[TimeRange], format: Format, empty: &str) -> Result<String> {
    match format {
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(ranges).context("Failed to serialize ranges")?;
            json.push('\n');
            Ok(json)
        }
        Format::Text if ranges.is_empty() => Ok(format!("{}\n", empty)),
        Format::Text => Ok(ranges
            .iter()
            .map(|r| {
                format!(
                    "{}-{} ({} min)\n",
                    format_clock(r.start()),
                    format_clock(r.end()),
                    r.duration()
                )
            })
            .collect()),
    }
}
