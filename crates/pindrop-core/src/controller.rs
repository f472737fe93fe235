//! Result/focus controller — the state machine at the heart of the widget.
//!
//! The controller owns the displayed suggestion list, the keyboard focus, the
//! loading flag, and the ticket bookkeeping that suppresses out-of-order
//! responses. It never performs I/O: the caller dispatches the lookup for a
//! ticket returned by [`SearchController::input_changed`] and feeds the reply
//! back through [`SearchController::apply_response`].
//!
//! # Stale-response guard
//!
//! Overlapping lookups are not cancelled; they run to completion and are
//! filtered here. A response is accepted only when its ticket is `>=` the
//! ticket of the last accepted response — last-issued-and-accepted wins, ties
//! break toward the newer request. A rejected response changes nothing.

use crate::suggestion::{ResultSet, Suggestion, Ticket};

/// State machine over the suggestion list, focus, and in-flight lookups.
#[derive(Debug, Default)]
pub struct SearchController {
    suggestions: Vec<Suggestion>,
    /// Index of the keyboard-focused row, clamped to `[0, len - 1]`.
    focus: Option<usize>,
    loading: bool,
    /// Ticket of the most recently accepted response.
    last_accepted: Ticket,
    /// Count of tickets issued so far; the next ticket is `issued + 1`.
    issued: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to an input edit.
    ///
    /// Empty input clears the list, focus, and loading flag synchronously and
    /// returns `None` — no lookup should be issued. Non-empty input sets the
    /// loading flag and returns a fresh ticket for the caller to dispatch
    /// with. Previously displayed suggestions stay visible until a newer
    /// response is accepted.
    pub fn input_changed(&mut self, query: &str) -> Option<Ticket> {
        if query.is_empty() {
            tracing::debug!("input cleared");
            self.reset();
            return None;
        }
        self.loading = true;
        self.issued += 1;
        let ticket = Ticket(self.issued);
        tracing::debug!(%ticket, query, "lookup issued");
        Some(ticket)
    }

    /// Feed back the result of a dispatched lookup.
    ///
    /// Returns `true` when the response was accepted: the list is replaced
    /// wholesale, focus cleared, and loading ends. Returns `false` when the
    /// response is stale — a newer response was already accepted — in which
    /// case it is dropped without touching any state.
    pub fn apply_response(&mut self, set: ResultSet) -> bool {
        if set.ticket < self.last_accepted {
            tracing::debug!(%set.ticket, last = %self.last_accepted, "stale response dropped");
            return false;
        }
        tracing::debug!(%set.ticket, count = set.suggestions.len(), "response accepted");
        self.last_accepted = set.ticket;
        self.suggestions = set.suggestions;
        self.focus = None;
        self.loading = false;
        true
    }

    /// Move the keyboard focus by `delta` rows.
    ///
    /// From an unfocused state any movement lands on index 0. Otherwise the
    /// new index is clamped to `[0, len - 1]`. Ignored while a lookup is in
    /// flight or when the list is empty.
    pub fn move_focus(&mut self, delta: isize) {
        if self.loading || self.suggestions.is_empty() {
            return;
        }
        let next = match self.focus {
            None => 0,
            Some(focus) => {
                let max = (self.suggestions.len() - 1) as isize;
                (focus as isize + delta).clamp(0, max) as usize
            }
        };
        tracing::debug!(focus = next, "focus moved");
        self.focus = Some(next);
    }

    /// Commit the current input (Enter).
    ///
    /// With a focused row, returns that suggestion and leaves the list on
    /// screen. With no focus but a non-empty list, commits the first row the
    /// way a pointer click would, clearing the widget. Either path yields the
    /// committed suggestion exactly once; an empty list yields nothing.
    pub fn submit(&mut self) -> Option<Suggestion> {
        match self.focus {
            Some(focus) => self.suggestions.get(focus).cloned(),
            None if !self.suggestions.is_empty() => self.click_option(0),
            None => None,
        }
    }

    /// Commit the suggestion at `index` (pointer activation), ignoring the
    /// current focus. Clears the list, focus, and loading flag on success.
    pub fn click_option(&mut self, index: usize) -> Option<Suggestion> {
        let picked = self.suggestions.get(index).cloned()?;
        tracing::debug!(index, place = %picked.place_name, "option committed");
        self.reset();
        Some(picked)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused(&self) -> Option<&Suggestion> {
        self.focus.and_then(|i| self.suggestions.get(i))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Clear the list, focus, and loading flag. The last-accepted ticket is
    /// deliberately kept: an in-flight response issued before the clear is
    /// still accepted when it lands.
    fn reset(&mut self) {
        self.suggestions.clear();
        self.focus = None;
        self.loading = false;
    }
}
