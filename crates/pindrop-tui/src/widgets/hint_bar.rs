//! Hint bar — the single bottom row showing keybinding hints, replaced by the
//! last lookup-failure message when one is pending. The core never renders
//! error state; surfacing failures is this shell's job.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: &str = " ↑/↓ move   enter select   esc quit";

pub struct HintBar<'a> {
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> HintBar<'a> {
    pub fn new(error: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { error, theme }
    }
}

impl Widget for HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.error {
            Some(message) => Line::from(Span::styled(format!(" {message}"), self.theme.error)),
            None => Line::from(Span::styled(HINTS, self.theme.hint)),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
