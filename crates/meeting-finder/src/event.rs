//! Query inputs: existing calendar events and the meeting being requested.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};
use crate::time_range::TimeRange;

/// An event already on the calendar.
///
/// Attendees are opaque identifiers; the engine only checks set membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub when: TimeRange,
    #[serde(default)]
    pub attendees: BTreeSet<String>,
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

    /// True if any of `attendees` is at this event.
    pub fn involves_any(&self, attendees: &BTreeSet<String>) -> bool {
        // Iterate the smaller set.
        if self.attendees.len() <= attendees.len() {
            self.attendees.iter().any(|a| attendees.contains(a))
        } else {
            attendees.iter().any(|a| self.attendees.contains(a))
        }
    }
}

/// A request for a meeting of `duration` minutes with every listed attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RequestRepr", into = "RequestRepr")]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    duration: i64,
}

#[derive(Serialize, Deserialize)]
struct RequestRepr {
    #[serde(default)]
    attendees: BTreeSet<String>,
    duration: i64,
}

impl TryFrom<RequestRepr> for MeetingRequest {
    type Error = MeetingError;

    fn try_from(repr: RequestRepr) -> Result<Self> {
        MeetingRequest::new(repr.attendees, repr.duration)
    }
}

impl From<MeetingRequest> for RequestRepr {
    fn from(request: MeetingRequest) -> Self {
        RequestRepr {
            attendees: request.attendees,
            duration: request.duration,
        }
    }
}

impl MeetingRequest {
    /// # Errors
    /// Returns `MeetingError::NegativeDuration` if `duration < 0`.
    pub fn new<I, S>(attendees: I, duration: i64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration < 0 {
            return Err(MeetingError::NegativeDuration(duration));
        }
        Ok(MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            duration,
        })
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Requested length in minutes.
    pub fn duration(&self) -> i64 {
        self.duration
    }
}
