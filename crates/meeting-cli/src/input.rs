//! Reading schedules and building the meeting request from input + flags.

use std::collections::HashSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use meeting_engine::{Event, MeetingRequest};
use serde::Deserialize;

/// The JSON document accepted on input.
#[derive(Debug, Deserialize)]
pub struct Schedule {
    pub events: Vec<Event>,
    #[serde(default)]
    pub request: Option<MeetingRequest>,
}

/// Request fields given on the command line. Each one, when present,
/// replaces the matching field of the request in the input.
#[derive(Debug, Default)]
pub struct RequestOverrides {
    pub attendees: Vec<String>,
    pub optional: Vec<String>,
    pub duration: Option<u32>,
}

pub fn parse_schedule(json: &str) -> Result<Schedule> {
    serde_json::from_str(json).context("Failed to parse schedule JSON")
}

/// Combine the request from the input with command-line overrides.
pub fn build_request(
    from_input: Option<MeetingRequest>,
    overrides: RequestOverrides,
) -> Result<MeetingRequest> {
    let mut request = match (from_input, overrides.duration) {
        (Some(request), _) => request,
        (None, Some(duration)) => MeetingRequest::new(Vec::<String>::new(), duration),
        (None, None) => {
            anyhow::bail!("Input has no \"request\"; pass --duration to describe the meeting")
        }
    };

    if let Some(duration) = overrides.duration {
        request.duration = duration;
    }
    if !overrides.attendees.is_empty() {
        request.attendees = to_set(overrides.attendees);
    }
    if !overrides.optional.is_empty() {
        request.optional_attendees = to_set(overrides.optional);
    }

    Ok(request)
}

fn to_set(names: Vec<String>) -> HashSet<String> {
    names.into_iter().collect()
}

pub fn read_input(path: Option<&str>) -> Result<String> {
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

pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
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
