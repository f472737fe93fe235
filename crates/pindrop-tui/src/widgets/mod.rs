//! pindrop widgets. Each widget follows the same pattern: a plain state
//! struct mutated by [`crate::event::AppEvent`] handlers, and a render-only
//! `Widget` borrowing that state plus the theme.

pub mod hint_bar;
pub mod search_input;
pub mod suggestion_list;
