//! Search session — the controller plus the two observer hooks.
//!
//! [`SearchSession`] is what embedders drive: it forwards operations to the
//! inner [`SearchController`] and fires `on_select` / `on_suggest` at the
//! right moments. `on_select` fires exactly once per committed selection;
//! `on_suggest` fires once per accepted (non-stale) result set, including
//! when the accepted set is empty. Stale responses fire nothing.

use crate::controller::SearchController;
use crate::suggestion::{ResultSet, Suggestion, Ticket};

type SelectHook = Box<dyn FnMut(&Suggestion)>;
type SuggestHook = Box<dyn FnMut(&[Suggestion])>;

/// Controller wrapper owning the selection and suggestion observers.
///
/// Hooks are `FnMut` closures supplied at construction; `on_select` is
/// required, `on_suggest` optional. Committing methods also return the
/// committed suggestion so a caller that drives the session directly (the
/// TUI shell) does not need to smuggle state out of its own closure.
pub struct SearchSession {
    controller: SearchController,
    on_select: SelectHook,
    on_suggest: Option<SuggestHook>,
}

impl SearchSession {
    pub fn new(on_select: impl FnMut(&Suggestion) + 'static) -> Self {
        Self {
            controller: SearchController::new(),
            on_select: Box::new(on_select),
            on_suggest: None,
        }
    }

    /// Attach the optional `on_suggest` observer.
    pub fn with_on_suggest(mut self, on_suggest: impl FnMut(&[Suggestion]) + 'static) -> Self {
        self.on_suggest = Some(Box::new(on_suggest));
        self
    }

    /// See [`SearchController::input_changed`]. The caller dispatches a
    /// lookup for the returned ticket; `None` means the input was empty and
    /// the widget was cleared without a network call.
    pub fn input_changed(&mut self, query: &str) -> Option<Ticket> {
        self.controller.input_changed(query)
    }

    /// Feed a lookup result back in. Fires `on_suggest` when the response is
    /// accepted; a stale response is dropped silently.
    pub fn apply_response(&mut self, set: ResultSet) -> bool {
        let accepted = self.controller.apply_response(set);
        if accepted {
            if let Some(on_suggest) = &mut self.on_suggest {
                on_suggest(self.controller.suggestions());
            }
        }
        accepted
    }

    /// See [`SearchController::move_focus`].
    pub fn move_focus(&mut self, delta: isize) {
        self.controller.move_focus(delta);
    }

    /// Commit the current input (Enter). Fires `on_select` exactly once when
    /// a suggestion is committed, with the focused row or — when nothing is
    /// focused — the first row.
    pub fn submit(&mut self) -> Option<Suggestion> {
        let picked = self.controller.submit()?;
        (self.on_select)(&picked);
        Some(picked)
    }

    /// Commit the suggestion at `index` (pointer activation). Fires
    /// `on_select` exactly once and resets the widget.
    pub fn click_option(&mut self, index: usize) -> Option<Suggestion> {
        let picked = self.controller.click_option(index)?;
        (self.on_select)(&picked);
        Some(picked)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.controller.suggestions()
    }

    pub fn focus(&self) -> Option<usize> {
        self.controller.focus()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }
}
