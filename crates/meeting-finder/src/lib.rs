//! # meeting-finder
//!
//! Find the windows in a single day where a meeting could be held, given the
//! events already on the attendees' calendars.
//!
//! Times are whole minutes from midnight. Busy ranges of every requested
//! attendee are merged into one sorted cover, the cover is inverted against
//! the whole day, and windows shorter than the requested duration are dropped.
//!
//! ```rust
//! use meeting_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "standup",
//!     TimeRange::from_start_end(60, 90, false).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30).unwrap();
//!
//! let windows = query(&events, &request);
//! assert_eq!(
//!     windows,
//!     vec![
//!         TimeRange::from_start_end(0, 60, false).unwrap(),
//!         TimeRange::from_start_end(90, 1440, false).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Minute-granularity `TimeRange` and day constants
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`query`] — Busy collection, merging, complement and duration filter
//! - [`availability`] — Busy cover and free windows together, first-fit lookup
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod event;
pub mod query;
pub mod time_range;

pub use availability::{availability, find_first_meeting_time, Availability};
pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use query::{query, MeetingQuery};
pub use time_range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
