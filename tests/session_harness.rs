//! Selection and focus-traversal harness.
//!
//! # What this covers
//!
//! Drives the session/controller pair through complete interaction cycles
//! and asserts on the observer contract:
//!
//! - **Pointer activation** fires `on_select` exactly once with the clicked
//!   suggestion and resets the widget to idle.
//! - **Enter** fires `on_select` exactly once in every focus state: the
//!   focused row when one is focused, the first row otherwise, nothing on an
//!   empty list. (One selection per Enter press is the locked-in behaviour;
//!   the focused path keeps the list, the unfocused path clears it.)
//! - **Focus traversal**: entering the list from an unfocused state lands on
//!   row 0 for either direction; movement clamps to `[0, len - 1]` under
//!   arbitrary delta sequences (property-tested); focus is inert while a
//!   lookup is in flight.
//!
//! # Running
//!
//! ```sh
//! cargo test --test session_harness
//! ```

mod common;
use common::*;

use pindrop_core::Ticket;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn pointer_activation_selects_exactly_once_and_resets() {
    let (mut session, selections, _) = recording_session();
    let ticket = session.input_changed("par").unwrap();
    session.apply_response(result_set(
        ticket,
        &[("place.paris", "Paris"), ("place.parma", "Parma")],
    ));
    session.move_focus(1); // focus Paris; the click must ignore it

    let picked = session.click_option(1).unwrap();

    assert_eq!(picked.place_name, "Parma");
    assert_eq!(*selections.borrow(), vec!["Parma"]);
    assert!(session.suggestions().is_empty());
    assert_eq!(session.focus(), None);
    assert!(!session.is_loading());
}

#[test]
fn enter_with_a_focused_row_selects_it_exactly_once() {
    let (mut session, selections, _) = recording_session();
    let ticket = session.input_changed("par").unwrap();
    session.apply_response(result_set(
        ticket,
        &[("place.paris", "Paris"), ("place.parma", "Parma")],
    ));
    session.move_focus(1);
    session.move_focus(1);

    let picked = session.submit().unwrap();

    assert_eq!(picked.place_name, "Parma");
    assert_eq!(*selections.borrow(), vec!["Parma"]);
    // The focused path leaves the list on screen.
    assert_eq!(session.suggestions().len(), 2);
}

#[test]
fn enter_without_focus_selects_the_first_row_exactly_once() {
    let (mut session, selections, _) = recording_session();
    let ticket = session.input_changed("par").unwrap();
    session.apply_response(result_set(
        ticket,
        &[("place.paris", "Paris"), ("place.parma", "Parma")],
    ));

    let picked = session.submit().unwrap();

    assert_eq!(picked.place_name, "Paris");
    assert_eq!(*selections.borrow(), vec!["Paris"]);
    // The first-row path behaves like a click: the widget resets.
    assert!(session.suggestions().is_empty());
}

#[test]
fn enter_on_an_empty_list_selects_nothing() {
    let (mut session, selections, _) = recording_session();

    assert_eq!(session.submit(), None);

    let ticket = session.input_changed("zzz").unwrap();
    session.apply_response(result_set(ticket, &[]));
    assert_eq!(session.submit(), None);
    assert!(selections.borrow().is_empty());
}

// ---------------------------------------------------------------------------
// Focus traversal
// ---------------------------------------------------------------------------

#[test]
fn entering_the_list_lands_on_row_zero_for_either_direction() {
    for delta in [-1isize, 1] {
        let (mut session, _, _) = recording_session();
        let ticket = session.input_changed("par").unwrap();
        session.apply_response(result_set(
            ticket,
            &[("place.paris", "Paris"), ("place.parma", "Parma")],
        ));

        session.move_focus(delta);
        assert_eq!(session.focus(), Some(0), "delta {delta} must land on row 0");
    }
}

#[test]
fn focus_is_inert_while_a_lookup_is_in_flight() {
    let (mut session, _, _) = recording_session();
    let ticket = session.input_changed("par").unwrap();
    session.apply_response(result_set(ticket, &[("place.paris", "Paris")]));

    // A new keystroke puts the session back into loading.
    session.input_changed("pari").unwrap();
    session.move_focus(1);
    assert_eq!(session.focus(), None);
}

proptest! {
    /// Focus stays within `[0, len - 1]` under arbitrary movement sequences.
    #[test]
    fn prop_focus_always_within_bounds(
        len in 1usize..16,
        deltas in proptest::collection::vec(-3isize..=3, 1..50),
    ) {
        let (mut session, _, _) = recording_session();
        let ticket = session.input_changed("q").unwrap();
        let features: Vec<(String, String)> = (0..len)
            .map(|i| (format!("place.{i}"), format!("Place {i}")))
            .collect();
        let features: Vec<(&str, &str)> = features
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
            .collect();
        session.apply_response(result_set(ticket, &features));

        for delta in deltas {
            session.move_focus(delta);
            let focus = session.focus().expect("focus set after first move");
            prop_assert!(focus < len, "focus {focus} out of bounds for len {len}");
        }
    }

    /// A response for an older ticket never displaces a newer accepted one,
    /// whatever the interleaving.
    #[test]
    fn prop_only_the_newest_accepted_ticket_wins(order in Just(vec![0usize, 1, 2, 3]).prop_shuffle()) {
        let (mut session, _, _) = recording_session();
        let tickets: Vec<Ticket> = (0..4)
            .map(|_| session.input_changed("q").unwrap())
            .collect();

        let mut newest_applied: Option<Ticket> = None;
        for i in order {
            let ticket = tickets[i];
            let name = format!("Place {i}");
            let accepted = session.apply_response(result_set(ticket, &[("place.x", name.as_str())]));
            let expected = newest_applied.map_or(true, |newest| ticket >= newest);
            prop_assert_eq!(accepted, expected);
            if accepted {
                newest_applied = Some(ticket);
            }
        }
    }
}
