//! Calendar events.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A calendar event: when it happens and who attends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name. Has no effect on scheduling.
    pub name: String,
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether at least one of `people` attends this event.
    pub fn involves_any(&self, people: &HashSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
