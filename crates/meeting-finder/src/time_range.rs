//! Minute-granularity time ranges within a single day.
//!
//! A [`TimeRange`] is the half-open interval `[start, start + duration)` where
//! both values are whole minutes counted from midnight. Ranges are immutable;
//! the constructors reject negative starts and negative durations so nothing
//! downstream has to re-check them.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: i64 = 0;

/// Last minute of the day, inclusive.
pub const END_OF_DAY: i64 = MINUTES_PER_DAY - 1;

/// A half-open `[start, end)` range of minutes from midnight.
///
/// Equality compares start and duration. The [`Ord`] impl sorts by ascending
/// start, then ascending end (see [`TimeRange::order_by_start`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct TimeRange {
    start: i64,
    duration: i64,
}

/// Wire form: `{"start": 60, "end": 90}` with an exclusive end.
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: i64,
    end: i64,
}

impl TryFrom<RangeRepr> for TimeRange {
    type Error = MeetingError;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        TimeRange::from_start_end(repr.start, repr.end, false)
    }
}

impl From<TimeRange> for RangeRepr {
    fn from(range: TimeRange) -> Self {
        RangeRepr {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl TimeRange {
    /// The whole day, `[START_OF_DAY, MINUTES_PER_DAY)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        duration: MINUTES_PER_DAY,
    };

    /// Build a range from its start and length in minutes.
    ///
    /// # Errors
    /// Returns `MeetingError::NegativeStart` or `MeetingError::NegativeDuration`,
    /// and `MeetingError::Overflow` if `start + duration` does not fit in an `i64`.
    pub fn from_start_duration(start: i64, duration: i64) -> Result<Self> {
        if start < 0 {
            return Err(MeetingError::NegativeStart(start));
        }
        if duration < 0 {
            return Err(MeetingError::NegativeDuration(duration));
        }
        TimeRange::checked(start, duration)
    }

    /// Build a range from a start and an end minute.
    ///
    /// With `inclusive` set, `end` is the last minute inside the range
    /// (`duration = end - start + 1`), which is how the whole day is written
    /// as `[START_OF_DAY, END_OF_DAY]`. Otherwise `end` is the first minute
    /// after the range.
    ///
    /// # Errors
    /// Returns `MeetingError::NegativeStart` if `start < 0`,
    /// `MeetingError::EndBeforeStart` if the resulting duration is negative, and
    /// `MeetingError::Overflow` if an inclusive `end` of `i64::MAX` has no
    /// exclusive end.
    pub fn from_start_end(start: i64, end: i64, inclusive: bool) -> Result<Self> {
        if start < 0 {
            return Err(MeetingError::NegativeStart(start));
        }
        // `start - 1` cannot underflow once `start >= 0`.
        let earliest_end = if inclusive { start - 1 } else { start };
        if end < earliest_end {
            return Err(MeetingError::EndBeforeStart { start, end });
        }
        let duration = if inclusive {
            (end - start).checked_add(1).ok_or_else(|| {
                MeetingError::Overflow(format!("inclusive end {end} has no following minute"))
            })?
        } else {
            end - start
        };
        TimeRange::checked(start, duration)
    }

    /// Build a range from wall-clock times, with an exclusive `end`.
    ///
    /// Seconds are truncated. An `end` of `00:00` means the end of the day, so
    /// `from_clock(09:00, 00:00)` covers the rest of the day after 9am.
    ///
    /// # Errors
    /// Returns `MeetingError::EndBeforeStart` if `end` falls before `start`.
    pub fn from_clock(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let start_minute = minute_of_day(start);
        let end_minute = match minute_of_day(end) {
            0 => MINUTES_PER_DAY,
            m => m,
        };
        TimeRange::from_start_end(start_minute, end_minute, false)
    }

    /// Every constructed range has an `end()` that fits in an `i64`.
    fn checked(start: i64, duration: i64) -> Result<Self> {
        match start.checked_add(duration) {
            Some(_) => Ok(TimeRange { start, duration }),
            None => Err(MeetingError::Overflow(format!(
                "range starting at {start} with {duration} minutes ends past i64::MAX"
            ))),
        }
    }

    /// `[start, end)` for bounds the caller has already checked.
    ///
    /// Only `query::free_intervals` calls this, with `0 <= cursor < busy.start()`
    /// or `cursor <= END_OF_DAY < end`, so `0 <= start <= end` always holds.
    pub(crate) fn spanning(start: i64, end: i64) -> Self {
        debug_assert!(0 <= start && start <= end, "bad span {start}..{end}");
        TimeRange {
            start,
            duration: end - start,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// First minute after the range.
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.duration == 0
    }

    /// Wall-clock start, or `None` if the range starts past the end of the day.
    pub fn start_time(&self) -> Option<NaiveTime> {
        clock_time(self.start)
    }

    /// Wall-clock end. A range ending exactly at midnight reports `00:00`.
    pub fn end_time(&self) -> Option<NaiveTime> {
        match self.end() {
            MINUTES_PER_DAY => clock_time(0),
            end => clock_time(end),
        }
    }

    /// True iff the two ranges share at least one minute.
    ///
    /// Ranges that only touch (`a.end() == b.start()`) do not overlap, and an
    /// empty range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end()
            && other.start < self.end()
    }

    /// True iff `other` lies entirely inside `self`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    /// True iff `minute` falls inside the range.
    pub fn contains_minute(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(&self, other: &TimeRange) -> TimeRange {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        TimeRange {
            start,
            duration: end - start,
        }
    }

    /// The minutes shared by both ranges, if any.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        (start < end).then_some(TimeRange {
            start,
            duration: end - start,
        })
    }

    /// Ascending start, ties broken by ascending end.
    ///
    /// Usable directly with `sort_by(TimeRange::order_by_start)`.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start).then_with(|| a.end().cmp(&b.end()))
    }

    /// Ascending end, ties broken by ascending start.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end().cmp(&b.end()).then_with(|| a.start.cmp(&b.start))
    }
}

impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        TimeRange::order_by_start(self, other)
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeRange {
    /// `HH:MM-HH:MM`, with `24:00` for a range ending at midnight.
    ///
    /// Hours are not wrapped: a range running past midnight renders its end
    /// as `25:00` and beyond, e.g. `23:20-25:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.start, self.end());
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            start / 60,
            start % 60,
            end / 60,
            end % 60
        )
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

fn clock_time(minute: i64) -> Option<NaiveTime> {
    if !(START_OF_DAY..MINUTES_PER_DAY).contains(&minute) {
        return None;
    }
    NaiveTime::from_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0)
}
