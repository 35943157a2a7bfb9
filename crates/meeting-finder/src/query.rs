//! Find the free windows in a day where a requested meeting fits.
//!
//! Collects the events of every requested attendee, merges their ranges into
//! a sorted cover, takes the complement against the whole day, then drops the
//! windows shorter than the requested duration.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::event::{Event, MeetingRequest};
use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// The inputs of a single query, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct MeetingQuery<'a> {
    events: &'a [Event],
    request: &'a MeetingRequest,
}

impl<'a> MeetingQuery<'a> {
    pub fn new(events: &'a [Event], request: &'a MeetingRequest) -> Self {
        MeetingQuery { events, request }
    }

    /// Merged busy cover of the requested attendees.
    pub fn busy(&self) -> Vec<TimeRange> {
        merge_intervals(busy_intervals(self.events, self.request.attendees()))
    }

    /// Candidate windows, sorted by start.
    pub fn run(&self) -> Vec<TimeRange> {
        let busy = self.busy();
        let free = free_intervals(&busy);
        let min_duration = self.request.duration();

        let windows: Vec<TimeRange> = free
            .into_iter()
            .filter(|window| window.duration() >= min_duration)
            .collect();

        debug!(
            events = self.events.len(),
            attendees = self.request.attendees().len(),
            busy = busy.len(),
            windows = windows.len(),
            min_duration,
            "meeting query finished"
        );
        windows
    }
}

/// Find every window of at least `request.duration()` minutes during which
/// none of the requested attendees is at an event.
///
/// Never fails: no attendees or no events yields the whole day, and a
/// duration longer than the day yields an empty list.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    MeetingQuery::new(events, request).run()
}

/// Ranges of the events attended by at least one of `attendees`, clipped to
/// the day. Empty ranges are dropped. Order follows `events`.
pub fn busy_intervals(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    let busy: Vec<TimeRange> = events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .filter_map(|event| event.when.intersection(&TimeRange::WHOLE_DAY))
        .collect();

    trace!(collected = busy.len(), "collected busy intervals");
    busy
}

/// Merge ranges into a sorted, non-overlapping cover.
///
/// Ranges that overlap, nest, or touch end-to-start are coalesced, so the
/// output never holds two ranges with `a.end() == b.start()`.
pub fn merge_intervals(mut intervals: Vec<TimeRange>) -> Vec<TimeRange> {
    intervals.sort_by(TimeRange::order_by_start);

    let mut merged: Vec<TimeRange> = Vec::with_capacity(intervals.len());
    for next in intervals {
        if let Some(current) = merged.last_mut() {
            if next.start() <= current.end() {
                *current = current.union(&next);
                continue;
            }
        }
        merged.push(next);
    }

    trace!(merged = merged.len(), "merged busy intervals");
    merged
}

/// Complement of a sorted busy cover against the whole day.
///
/// `busy` must be sorted by start, as returned by [`merge_intervals`]. The
/// result is sorted and contains no empty ranges.
pub fn free_intervals(busy: &[TimeRange]) -> Vec<TimeRange> {
    let mut free = Vec::with_capacity(busy.len() + 1);
    let mut cursor = START_OF_DAY;

    for range in busy {
        if cursor < range.start() {
            free.push(TimeRange::spanning(cursor, range.start()));
        }
        cursor = cursor.max(range.end());
    }

    // Trailing window up to the last minute of the day, inclusive.
    if cursor <= END_OF_DAY {
        free.push(TimeRange::spanning(cursor, END_OF_DAY + 1));
    }

    free
}
