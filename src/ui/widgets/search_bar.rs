//! Search bar widget for query input

use crate::ui::input::InputState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Query input state
    input: &'a InputState,
    /// Prompt text
    prompt: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(input: &'a InputState, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            input,
            prompt,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(self.prompt, self.theme.dimmed_style()),
            Span::raw(" "),
        ];

        let (before, after) = self.input.split_at_cursor();
        spans.push(Span::raw(before));
        if self.focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans.push(Span::raw(after));

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}
