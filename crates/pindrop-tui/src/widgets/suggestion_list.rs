//! Suggestion list widget — one row per suggestion, focused row highlighted.
//!
//! Rows are identified by the suggestion's stable `id` and labelled with its
//! `place_name`; this is the whole rendering contract with the core. The
//! keyboard focus is distinct from pointer hover — only the focused row gets
//! `row_focused` styling.

use std::cell::Cell;

use crate::theme::Theme;
use pindrop_core::Suggestion;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Render-side state: caches the last rendered area so clicks can be mapped
/// back to row indices.
#[derive(Debug, Default)]
pub struct SuggestionListState {
    /// Cached from the last render. Safe because draw always runs before the
    /// click event that consults it.
    last_area: Cell<Rect>,
}

impl SuggestionListState {
    /// Map a terminal cell to a row index within the last rendered list area.
    /// The caller still bounds-checks the index against the current list.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_area.get();
        let inside = column >= area.left()
            && column < area.right()
            && row >= area.top()
            && row < area.bottom();
        inside.then(|| (row - area.top()) as usize)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SuggestionList<'a> {
    suggestions: &'a [Suggestion],
    focus: Option<usize>,
    state: &'a SuggestionListState,
    theme: &'a Theme,
}

impl<'a> SuggestionList<'a> {
    pub fn new(
        suggestions: &'a [Suggestion],
        focus: Option<usize>,
        state: &'a SuggestionListState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            suggestions,
            focus,
            state,
            theme,
        }
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.state.last_area.set(area);

        let lines: Vec<Line> = self
            .suggestions
            .iter()
            .take(area.height as usize)
            .enumerate()
            .map(|(row, suggestion)| {
                let style = if Some(row) == self.focus {
                    self.theme.row_focused
                } else {
                    self.theme.row
                };
                Line::from(Span::styled(format!(" {}", suggestion.place_name), style))
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
