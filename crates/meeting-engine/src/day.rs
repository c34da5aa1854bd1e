//! Day boundaries, in minutes since midnight.

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// End of the day (exclusive). No range may extend past this minute.
pub const END_OF_DAY: u32 = MINUTES_PER_DAY;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Render a minute-of-day as `HH:MM`.
///
/// `END_OF_DAY` renders as `24:00` so that ranges reaching the end of the day
/// read naturally.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
