//! Find the free slots in which a meeting can be held.
//!
//! Only events attended by at least one requested person matter. Their ranges
//! are sorted and swept once: ranges nested inside the furthest-reaching
//! range so far are skipped, and every gap wide enough for the meeting
//! (including the gaps at either end of the day) becomes a slot.

use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::day::{END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Find every range of the day in which all mandatory attendees are free for
/// at least `request.duration` minutes.
///
/// Returns ranges sorted by start and pairwise disjoint. Each range is the
/// whole gap, not just `duration` minutes of it. A request longer than a day
/// yields no slots; a request whose attendees have no events yields the whole
/// day.
///
/// A zero-minute request also matches the zero-width boundary between
/// back-to-back events.
#[instrument(skip_all, fields(events = events.len(), duration = request.duration))]
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    free_slots(events, &request.attendees, request.duration)
}

/// Like [`find_meeting_times`], but tries to fit optional attendees in too.
///
/// If some slot suits mandatory and optional attendees alike, only those slots
/// are returned. Otherwise the optional attendees are dropped and the
/// mandatory-only slots are returned. A request with no mandatory attendees
/// gets the optional-attendee slots even when there are none.
#[instrument(
    skip_all,
    fields(
        events = events.len(),
        duration = request.duration,
        optional = request.optional_attendees.len()
    )
)]
pub fn find_meeting_times_with_optional(
    events: &[Event],
    request: &MeetingRequest,
) -> Vec<TimeRange> {
    if request.optional_attendees.is_empty() {
        return free_slots(events, &request.attendees, request.duration);
    }

    let everyone: HashSet<String> = request
        .attendees
        .union(&request.optional_attendees)
        .cloned()
        .collect();
    let with_optional = free_slots(events, &everyone, request.duration);

    if !with_optional.is_empty() || request.attendees.is_empty() {
        return with_optional;
    }

    debug!("no slot fits the optional attendees, falling back to mandatory only");
    free_slots(events, &request.attendees, request.duration)
}

/// Ranges of the events attended by any of `people`, in input order.
pub(crate) fn related_ranges(events: &[Event], people: &HashSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|event| event.involves_any(people))
        .map(|event| event.when)
        .collect()
}

fn free_slots(events: &[Event], people: &HashSet<String>, duration: u32) -> Vec<TimeRange> {
    if duration > MINUTES_PER_DAY {
        debug!("requested duration is longer than a day");
        return Vec::new();
    }

    let mut related = related_ranges(events, people);
    if related.is_empty() {
        debug!("no related events, whole day is free");
        return vec![TimeRange::WHOLE_DAY];
    }

    // Ties on start are broken by end, so the sweep order is deterministic.
    related.sort_unstable();
    debug!(related = related.len(), "sweeping related events");

    let mut slots = Vec::new();
    let first = related[0];

    if START_OF_DAY + duration <= first.start() {
        slots.push(TimeRange::between(START_OF_DAY, first.start()));
    }

    // `reach` is the range with the latest end seen so far.
    let mut reach = first;
    for next in &related[1..] {
        if reach.end() >= next.end() {
            trace!(%next, %reach, "skipping nested event");
            continue;
        }
        if reach.end() + duration <= next.start() {
            let gap = TimeRange::between(reach.end(), next.start());
            trace!(%gap, "found gap");
            slots.push(gap);
        }
        reach = *next;
    }

    if reach.end() + duration <= END_OF_DAY {
        slots.push(TimeRange::between(reach.end(), END_OF_DAY));
    }

    debug!(slots = slots.len(), "query finished");
    slots
}
