//! Search input widget — the bordered query box.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! Up/Down and Enter belong to the suggestion list and are routed elsewhere
//! by the app shell.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const LOADER_LABEL: &str = "searching…";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchInputState {
    /// The query typed by the user.
    text: String,
    /// Byte offset of the cursor within `text`.
    cursor: usize,
}

impl SearchInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Handle a key event from the app shell. Returns `true` when the query
    /// text actually changed — the shell re-dispatches only then.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(text = %self.text, cursor = self.cursor, "input: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                // Walk back one char boundary
                let prev = self.text[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.text.remove(prev);
                self.cursor = prev;
                tracing::debug!(text = %self.text, cursor = self.cursor, "input: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.text[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                }
                false
            }
            _ => false,
        }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.text[..self.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchInput<'a> {
    state: &'a SearchInputState,
    placeholder: &'a str,
    /// Render the in-flight marker (`show_loader` config && loading).
    show_loader: bool,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    pub fn new(
        state: &'a SearchInputState,
        placeholder: &'a str,
        show_loader: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            placeholder,
            show_loader,
            theme,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: query text (fill) | loader marker (fixed width)
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(if self.show_loader {
                    LOADER_LABEL.chars().count() as u16 + 1
                } else {
                    0
                }),
            ])
            .split(inner);

        let line = if self.state.text.is_empty() {
            Line::from(Span::styled(self.placeholder, self.theme.placeholder))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(line).render(chunks[0], buf);

        if self.show_loader {
            Paragraph::new(Line::from(Span::styled(LOADER_LABEL, self.theme.loader)))
                .render(chunks[1], buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
