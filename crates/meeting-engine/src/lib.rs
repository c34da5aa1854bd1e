//! # meeting-engine
//!
//! Finds the free ranges within a single day in which a meeting can be held,
//! given the calendars of the people who must attend.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(600, 660, false).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_end(0, 600, false).unwrap(),
//!         TimeRange::from_start_end(660, 1440, false).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`day`] — Day boundary constants and clock formatting
//! - [`time_range`] — Half-open minute ranges within a day
//! - [`event`] — Calendar events with attendees
//! - [`request`] — Meeting requests (attendees + duration)
//! - [`query`] — Free slot search for a meeting request
//! - [`busy`] — Merged busy blocks for a set of attendees
//! - [`error`] — Error types

pub mod busy;
pub mod day;
pub mod error;
pub mod event;
pub mod query;
pub mod request;
pub mod time_range;

pub use busy::busy_blocks;
pub use error::MeetingError;
pub use event::Event;
pub use query::{find_meeting_times, find_meeting_times_with_optional};
pub use request::MeetingRequest;
pub use time_range::TimeRange;
