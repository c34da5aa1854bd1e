//! Half-open ranges of minutes within a single day.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::day::{END_OF_DAY, START_OF_DAY};
use crate::error::{MeetingError, Result};

/// An immutable range `[start, end)` of minutes since midnight.
///
/// Always satisfies `start <= end <= END_OF_DAY`. Ranges order by `start`,
/// then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Build a range from its endpoints.
    ///
    /// When `inclusive_of_end` is set, the minute `end` itself belongs to the
    /// range, so `from_start_end(0, 1439, true)` is the whole day.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if `end < start`.
    /// Returns `MeetingError::OutsideDay` if the range reaches past `END_OF_DAY`.
    pub fn from_start_end(start: u32, end: u32, inclusive_of_end: bool) -> Result<TimeRange> {
        if end < start {
            return Err(MeetingError::InvalidRange { start, end });
        }
        let end = if inclusive_of_end {
            end.checked_add(1).ok_or(MeetingError::OutsideDay { end })?
        } else {
            end
        };
        if end > END_OF_DAY {
            return Err(MeetingError::OutsideDay { end });
        }
        Ok(TimeRange { start, end })
    }

    /// Build a range from its start and length in minutes.
    ///
    /// # Errors
    /// Returns `MeetingError::OutsideDay` if the range reaches past `END_OF_DAY`.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<TimeRange> {
        let end = start
            .checked_add(duration)
            .ok_or(MeetingError::OutsideDay { end: u32::MAX })?;
        TimeRange::from_start_end(start, end, false)
    }

    /// Build a range the caller has already checked is well formed.
    pub(crate) fn between(start: u32, end: u32) -> TimeRange {
        debug_assert!(start <= end && end <= END_OF_DAY, "malformed range {start}..{end}");
        TimeRange { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether `minute` falls inside this range. Empty ranges contain nothing.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Order by end minute, then by start. The natural `Ord` orders by start.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        (a.end, a.start).cmp(&(b.end, b.start))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
