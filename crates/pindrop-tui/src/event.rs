//! Semantic application events — crossterm events mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! The search input is always focused, so there is a single mapping: every
//! printable character types into the query. Arrow keys are consumed here —
//! `↑` moves the suggestion focus instead of scrolling the terminal.
//!
//! | Input                   | Event                      |
//! |-------------------------|----------------------------|
//! | `Esc`, `Ctrl+c`         | `Quit`                     |
//! | `↑` / `↓`               | `Nav(Up)` / `Nav(Down)`    |
//! | `←` / `→`               | `Nav(Left)` / `Nav(Right)` |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | left mouse press        | `Click { column, row }`    |
//! | terminal resize         | `Resize(w, h)`             |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Direction for focus traversal (Up/Down) and text-cursor movement
/// (Left/Right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit without committing a selection.
    Quit,
    /// A printable character typed into the query.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the suggestion focus (Up/Down) or the text cursor (Left/Right).
    Nav(Direction),
    /// Commit the current input.
    Enter,
    /// Left mouse press at the given terminal cell.
    Click { column: u16, row: u16 },
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events with no semantic meaning here (mouse movement,
/// scroll wheel, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Quit — Esc or Ctrl+c, even mid-word
        Esc => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        // Every printable character — including shifted ones — types
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
