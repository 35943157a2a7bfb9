//! Busy cover and free windows of a group of attendees, side by side.
//!
//! Where [`query`](crate::query) answers "where does this meeting fit",
//! [`availability`] answers "what does the day look like" for a set of
//! attendees: the merged busy cover and its full complement, with no duration
//! filter applied. Together the two lists tile `[START_OF_DAY, END_OF_DAY]`
//! without gaps or double coverage.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::{Event, MeetingRequest};
use crate::query::{self, MeetingQuery};
use crate::time_range::TimeRange;

/// A group's day, split into busy and free ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Merged busy cover (sorted by start, non-overlapping, non-touching).
    pub busy: Vec<TimeRange>,
    /// Complement of `busy` within the day (sorted by start).
    pub free: Vec<TimeRange>,
}

impl Availability {
    /// Free windows at least `duration` minutes long.
    pub fn fits(&self, duration: i64) -> Vec<TimeRange> {
        self.free
            .iter()
            .copied()
            .filter(|window| window.duration() >= duration)
            .collect()
    }

    /// Total busy minutes.
    pub fn busy_minutes(&self) -> i64 {
        self.busy.iter().map(TimeRange::duration).sum()
    }

    /// Total free minutes.
    pub fn free_minutes(&self) -> i64 {
        self.free.iter().map(TimeRange::duration).sum()
    }
}

/// Compute the busy cover and free windows for `attendees`.
///
/// Events with none of `attendees` are ignored; an empty attendee set gives a
/// fully free day.
pub fn availability(events: &[Event], attendees: &BTreeSet<String>) -> Availability {
    let busy = query::merge_intervals(query::busy_intervals(events, attendees));
    let free = query::free_intervals(&busy);
    Availability { busy, free }
}

/// The earliest window that satisfies `request`, if any.
pub fn find_first_meeting_time(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    MeetingQuery::new(events, request).run().into_iter().next()
}
