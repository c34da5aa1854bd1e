//! Meeting requests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A request for a meeting of `duration` minutes.
///
/// Every mandatory attendee must be free for a slot to qualify. Optional
/// attendees are only considered by
/// [`find_meeting_times_with_optional`](crate::query::find_meeting_times_with_optional).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub attendees: HashSet<String>,
    #[serde(default)]
    pub optional_attendees: HashSet<String>,
    /// Minutes.
    pub duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
            duration,
        }
    }

    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }
}
