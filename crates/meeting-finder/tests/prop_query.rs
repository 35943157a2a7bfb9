//! Property-based tests for the meeting query using proptest.
//!
//! These check laws that hold for *any* set of events and any request, not
//! just the hand-written scenarios in `query_tests.rs`.

use std::collections::BTreeSet;

use meeting_finder::{availability, query, Event, MeetingRequest, TimeRange, MINUTES_PER_DAY};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 5] = ["alice", "bob", "carol", "dave", "erin"];

fn arb_attendees() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(prop::sample::select(PEOPLE.to_vec()), 0..=3)
        .prop_map(|set| set.into_iter().map(str::to_string).collect())
}

/// Events start anywhere in the day; some run past midnight.
fn arb_event() -> impl Strategy<Value = Event> {
    (0i64..MINUTES_PER_DAY, 0i64..=240, arb_attendees()).prop_map(|(start, duration, attendees)| {
        Event::new(
            "generated",
            TimeRange::from_start_duration(start, duration).unwrap(),
            attendees,
        )
    })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..24)
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_attendees(), 0i64..=MINUTES_PER_DAY + 60)
        .prop_map(|(attendees, duration)| MeetingRequest::new(attendees, duration).unwrap())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Every window is long enough
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_window_fits_the_request(events in arb_events(), request in arb_request()) {
        for window in query(&events, &request) {
            prop_assert!(
                window.duration() >= request.duration(),
                "{} shorter than {} minutes",
                window,
                request.duration()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Windows are sorted and disjoint
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_are_sorted_and_disjoint(events in arb_events(), request in arb_request()) {
        let windows = query(&events, &request);
        for pair in windows.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start(), "{} then {}", pair[0], pair[1]);
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No window overlaps an event of a requested attendee
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_avoid_attended_events(events in arb_events(), request in arb_request()) {
        let windows = query(&events, &request);
        for event in events.iter().filter(|e| e.involves_any(request.attendees())) {
            for window in &windows {
                prop_assert!(
                    !window.overlaps(&event.when),
                    "{} overlaps event at {}",
                    window,
                    event.when
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Busy and free tile the whole day exactly once
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn busy_and_free_tile_the_day(events in arb_events(), attendees in arb_attendees()) {
        let day = availability(&events, &attendees);

        let mut all: Vec<TimeRange> = day.busy.iter().chain(&day.free).copied().collect();
        all.sort();

        let mut cursor = 0;
        for range in &all {
            prop_assert!(!range.is_empty(), "empty range {}", range);
            prop_assert_eq!(range.start(), cursor);
            cursor = range.end();
        }
        prop_assert_eq!(cursor, MINUTES_PER_DAY);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Busy blocks never overlap or touch
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn busy_cover_is_minimal(events in arb_events(), attendees in arb_attendees()) {
        let day = availability(&events, &attendees);
        for pair in day.busy.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start(), "{} then {}", pair[0], pair[1]);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Event order does not change the result
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn result_ignores_event_order(
        events in arb_events(),
        request in arb_request(),
        shift in 0usize..24,
    ) {
        let expected = query(&events, &request);

        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(query(&reversed, &request), expected.clone());

        let mut rotated = events;
        if !rotated.is_empty() {
            let mid = shift % rotated.len();
            rotated.rotate_left(mid);
        }
        prop_assert_eq!(query(&rotated, &request), expected);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Busy and free minutes add up to one day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn busy_and_free_minutes_sum_to_a_day(events in arb_events(), attendees in arb_attendees()) {
        let day = availability(&events, &attendees);
        prop_assert_eq!(day.busy_minutes() + day.free_minutes(), MINUTES_PER_DAY);
        prop_assert_eq!(day.free_minutes(), day.fits(0).iter().map(TimeRange::duration).sum::<i64>());
    }
}
