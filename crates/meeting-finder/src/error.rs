//! Error types for meeting-finder construction.

use thiserror::Error;

/// Rejected input when building a [`TimeRange`](crate::TimeRange) or
/// [`MeetingRequest`](crate::MeetingRequest).
///
/// Queries themselves never fail; only the constructors do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    #[error("Negative start: {0} minutes")]
    NegativeStart(i64),

    #[error("Negative duration: {0} minutes")]
    NegativeDuration(i64),

    #[error("End {end} is before start {start}")]
    EndBeforeStart { start: i64, end: i64 },

    #[error("Overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
