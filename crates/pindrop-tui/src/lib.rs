//! pindrop TUI — ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use pindrop_core::config::{GeocoderConfig, UiConfig};
use pindrop_core::Suggestion;

/// Run the picker until the user commits a selection or quits.
///
/// `handle` must belong to a multi-threaded runtime: lookups are spawned onto
/// it and complete while the main thread blocks in the terminal event loop.
/// Returns the committed suggestion, or `None` when the user quit without
/// selecting.
pub fn run(
    search: GeocoderConfig,
    ui: UiConfig,
    handle: tokio::runtime::Handle,
) -> anyhow::Result<Option<Suggestion>> {
    let theme = theme::Theme::load_default();
    App::new(search, ui, theme, handle).run()
}
