//! Date/favorite filter overlay
//!
//! A centered modal with the two date fields and the favorite-only
//! checkbox. Edits stay in the overlay state until applied with Enter.

use crate::ui::state::{FilterField, FilterOverlayState};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Filter overlay widget
pub struct FilterOverlay<'a> {
    /// Overlay state
    state: &'a FilterOverlayState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> FilterOverlay<'a> {
    /// Create a new filter overlay widget
    #[must_use]
    pub const fn new(state: &'a FilterOverlayState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Centered rectangle of the given size within `area`
    fn centered(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Build one labeled date-field line
    fn date_line(
        &self,
        label: &str,
        input: &crate::ui::input::InputState,
        focused: bool,
    ) -> Line<'a> {
        let marker = if focused { "> " } else { "  " };
        let mut spans = vec![
            Span::styled(marker.to_string(), self.theme.cursor_style()),
            Span::styled(format!("{label} "), self.theme.dimmed_style()),
        ];

        let (before, after) = input.split_at_cursor();
        spans.push(Span::raw(before.to_string()));
        if focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans.push(Span::raw(after.to_string()));
        Line::from(spans)
    }
}

impl Widget for FilterOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::centered(44, 7, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Filters (Enter apply, ESC cancel) ");

        let inner = block.inner(popup);
        block.render(popup, buf);

        let checkbox_marker = if self.state.focused == FilterField::FavoriteOnly {
            "> "
        } else {
            "  "
        };
        let checkbox = if self.state.favorite_only {
            "[x]"
        } else {
            "[ ]"
        };

        let lines = vec![
            self.date_line(
                "From (YYYY-MM-DD):",
                &self.state.date_from,
                self.state.focused == FilterField::DateFrom,
            ),
            self.date_line(
                "To   (YYYY-MM-DD):",
                &self.state.date_to,
                self.state.focused == FilterField::DateTo,
            ),
            Line::from(vec![
                Span::styled(checkbox_marker.to_string(), self.theme.cursor_style()),
                Span::raw(format!("{checkbox} ")),
                Span::raw("Favorites only (Space toggles)"),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
