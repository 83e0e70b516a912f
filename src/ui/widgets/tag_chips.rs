//! Active tag chips row with inline tag-entry field
//!
//! Each active tag renders as a removable chip; the widget records every
//! chip's screen rectangle so the event layer can resolve mouse clicks
//! back to the tag they should remove. The remaining width holds the
//! tag-entry input.

use crate::ui::input::InputState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Tag chips row widget
pub struct TagChips<'a> {
    /// Active tags in display order
    tags: &'a [String],
    /// Tag-entry input state
    entry: &'a InputState,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the entry field has focus
    focused: bool,
    /// Hit areas written during render, consumed by mouse handling
    hit_areas: &'a mut Vec<(String, Rect)>,
}

impl<'a> TagChips<'a> {
    /// Create a new tag chips widget
    #[must_use]
    pub const fn new(
        tags: &'a [String],
        entry: &'a InputState,
        theme: &'a Theme,
        hit_areas: &'a mut Vec<(String, Rect)>,
    ) -> Self {
        Self {
            tags,
            entry,
            theme,
            focused: false,
            hit_areas,
        }
    }

    /// Set focus state of the entry field
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TagChips<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Tags ");

        let inner = block.inner(area);
        block.render(area, buf);

        self.hit_areas.clear();
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let y = inner.y;
        let right = inner.x + inner.width;
        let mut x = inner.x;

        for tag in self.tags {
            let label = format!(" {tag} ✕ ");
            let width = label.chars().count() as u16;
            if x + width > right {
                break;
            }

            let span = Span::styled(label, self.theme.chip_style());
            buf.set_span(x, y, &span, width);
            self.hit_areas.push((tag.clone(), Rect::new(x, y, width, 1)));
            x += width + 1;
        }

        // Entry field in the remaining width
        if x >= right {
            return;
        }

        let mut spans = vec![Span::styled("+ ", self.theme.dimmed_style())];
        let (before, after) = self.entry.split_at_cursor();
        spans.push(Span::raw(before));
        if self.focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans.push(Span::raw(after));

        let entry_area = Rect::new(x, y, right - x, 1);
        Paragraph::new(Line::from(spans)).render(entry_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell(Position::new(x, y)) {
                    text.push_str(cell.symbol());
                }
            }
        }
        text
    }

    #[test]
    fn test_chips_render_and_record_hit_areas() {
        let tags = vec!["rust".to_string(), "go".to_string()];
        let entry = InputState::new();
        let theme = Theme::default();
        let mut hit_areas = Vec::new();

        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        TagChips::new(&tags, &entry, &theme, &mut hit_areas).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains(" rust ✕ "));
        assert!(text.contains(" go ✕ "));

        assert_eq!(hit_areas.len(), 2);
        assert_eq!(hit_areas[0].0, "rust");
        // Chips sit on the single row inside the border
        assert!(hit_areas.iter().all(|(_, r)| r.y == 1 && r.height == 1));
        // Areas do not overlap
        assert!(hit_areas[0].1.x + hit_areas[0].1.width <= hit_areas[1].1.x);
    }

    #[test]
    fn test_overflowing_chips_are_dropped() {
        let tags = vec!["a-very-long-tag-name".to_string(), "second".to_string()];
        let entry = InputState::new();
        let theme = Theme::default();
        let mut hit_areas = Vec::new();

        let area = Rect::new(0, 0, 26, 3);
        let mut buf = Buffer::empty(area);
        TagChips::new(&tags, &entry, &theme, &mut hit_areas).render(area, &mut buf);

        assert_eq!(hit_areas.len(), 1);
    }
}
