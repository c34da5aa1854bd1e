//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Time range ends at minute {end}, past the end of the day")]
    OutsideDay { end: u32 },
}

pub type Result<T> = std::result::Result<T, MeetingError>;
