//! Result list widget
//!
//! Renders the current pipeline output, three rows per item: title with
//! source domain, date and favorite marker, then tags and excerpt, then
//! the item's URI. The whole list is rebuilt from the result set on every
//! frame, so rendering the same results twice yields the same screen.

use crate::library::Item;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Rows each result entry occupies
pub const ROWS_PER_ENTRY: usize = 3;

/// Result list widget
pub struct ItemList<'a> {
    /// Items to display, already in display order
    items: &'a [&'a Item],
    /// Cursor position in entry units
    cursor: usize,
    /// Scroll offset in entry units
    scroll_offset: usize,
    /// Collection size, for the "(shown/total)" title
    total: usize,
    /// chrono format string for the date column
    date_format: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub const fn new(
        items: &'a [&'a Item],
        cursor: usize,
        scroll_offset: usize,
        total: usize,
        date_format: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            items,
            cursor,
            scroll_offset,
            total,
            date_format,
            theme,
        }
    }

    /// Render a single entry as three lines
    fn render_entry(&self, item: &Item, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let title_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut title_spans = vec![
            Span::styled(cursor_char.to_string(), self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(item.title.clone(), title_style),
        ];
        if let Some(domain) = item.domain() {
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled(format!("({domain})"), self.theme.link_style()));
        }
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            item.format_time_added(self.date_format),
            self.theme.dimmed_style(),
        ));
        if item.favorite {
            title_spans.push(Span::styled(" ★".to_string(), self.theme.warning_style()));
        }

        let mut detail_spans = vec![Span::raw("    ")];
        if !item.tags.is_empty() {
            detail_spans.push(Span::styled(
                format!("[{}] ", item.tags.join(", ")),
                self.theme.tag_style(),
            ));
        }
        detail_spans.push(Span::styled(
            item.excerpt_or_placeholder().to_string(),
            self.theme.dimmed_style(),
        ));

        let link_line = Line::from(vec![
            Span::raw("    "),
            Span::styled(item.uri.clone(), self.theme.link_style()),
        ]);

        ListItem::new(vec![
            Line::from(title_spans),
            Line::from(detail_spans),
            link_line,
        ])
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Results ({}/{}) ", self.items.len(), self.total);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Calculate visible range in entry units
        let visible_entries = (inner.height as usize) / ROWS_PER_ENTRY;
        let start = self.scroll_offset;
        let end = (start + visible_entries.max(1)).min(self.items.len());

        let entries: Vec<ListItem> = (start..end)
            .filter_map(|idx| {
                let item = self.items.get(idx)?;
                Some(self.render_entry(item, idx == self.cursor))
            })
            .collect();

        List::new(entries).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_items;
    use ratatui::layout::{Position, Rect};

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

    fn render_once(items: &[&Item], cursor: usize, area: Rect) -> Buffer {
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);
        ItemList::new(items, cursor, 0, items.len(), "%Y-%m-%d", &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_render_is_idempotent() {
        let owned = sample_items();
        let items: Vec<&Item> = owned.iter().collect();
        let area = Rect::new(0, 0, 72, 12);

        assert_eq!(render_once(&items, 1, area), render_once(&items, 1, area));
    }

    #[test]
    fn test_render_shows_fields_and_placeholder() {
        let owned = sample_items();
        let items: Vec<&Item> = owned.iter().collect();
        let area = Rect::new(0, 0, 80, 14);

        let text = buffer_text(&render_once(&items, 0, area), area);
        assert!(text.contains("Rust memory model"));
        assert!(text.contains("doc.rust-lang.org"));
        assert!(text.contains("https://doc.rust-lang.org/nomicon/"));
        assert!(text.contains("rust, memory"));
        // The async-book item has an empty excerpt
        assert!(text.contains("No excerpt available"));
        assert!(text.contains(&format!("Results ({}/{})", items.len(), items.len())));
    }

    #[test]
    fn test_render_empty_results() {
        let items: Vec<&Item> = Vec::new();
        let area = Rect::new(0, 0, 40, 8);

        let text = buffer_text(&render_once(&items, 0, area), area);
        assert!(text.contains("Results (0/0)"));
    }
}
