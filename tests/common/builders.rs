//! Test builders — ergonomic constructors for suggestions, result sets, and
//! hook-recording sessions.
//!
//! These helpers are designed for readability in test assertions, not for
//! production use.

use pindrop_core::{ResultSet, SearchSession, Suggestion, Ticket};
use std::cell::RefCell;
use std::rc::Rc;

/// Build a [`Suggestion`] with no extra feature fields.
pub fn suggestion(id: &str, place_name: &str) -> Suggestion {
    Suggestion::new(id, place_name)
}

/// Build a [`ResultSet`] from `(id, place_name)` pairs.
pub fn result_set(ticket: Ticket, features: &[(&str, &str)]) -> ResultSet {
    let suggestions = features
        .iter()
        .map(|(id, name)| suggestion(id, name))
        .collect();
    ResultSet::new(suggestions, ticket)
}

/// JSON body of a geocoding reply containing the given `(id, place_name)`
/// features, shaped like the real API response.
pub fn features_body(features: &[(&str, &str)]) -> String {
    let features: Vec<serde_json::Value> = features
        .iter()
        .map(|(id, name)| serde_json::json!({ "id": id, "place_name": name }))
        .collect();
    serde_json::json!({ "type": "FeatureCollection", "features": features }).to_string()
}

/// Session whose hooks record every call.
///
/// Returns the session, the `place_name` of each committed selection in
/// order, and the size of each accepted suggestion list in order.
pub fn recording_session() -> (
    SearchSession,
    Rc<RefCell<Vec<String>>>,
    Rc<RefCell<Vec<usize>>>,
) {
    let selections = Rc::new(RefCell::new(Vec::new()));
    let suggest_sizes = Rc::new(RefCell::new(Vec::new()));
    let sel = Rc::clone(&selections);
    let sug = Rc::clone(&suggest_sizes);
    let session = SearchSession::new(move |s: &Suggestion| {
        sel.borrow_mut().push(s.place_name.clone());
    })
    .with_on_suggest(move |list: &[Suggestion]| {
        sug.borrow_mut().push(list.len());
    });
    (session, selections, suggest_sizes)
}
