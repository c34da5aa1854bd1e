//! Merged busy blocks for a set of attendees.
//!
//! Overlapping or touching event ranges are folded into one block, giving the
//! complement of what [`find_meeting_times`](crate::find_meeting_times) sees
//! as free.

use std::collections::HashSet;

use crate::event::Event;
use crate::query::related_ranges;
use crate::time_range::TimeRange;

/// Merge the ranges of every event attended by any of `people`.
///
/// Returns a sorted list of disjoint, non-adjacent ranges. Empty ranges only
/// survive when they touch nothing else.
pub fn busy_blocks(events: &[Event], people: &HashSet<String>) -> Vec<TimeRange> {
    let mut ranges = related_ranges(events, people);
    ranges.sort_unstable();

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                // Overlapping or adjacent, extend the current block.
                *last = TimeRange::between(last.start(), last.end().max(range.end()));
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
