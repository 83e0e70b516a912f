//! Status bar widget for messages and the active filter summary

use crate::search::FilterState;
use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One-line description of the configured filters
#[must_use]
pub fn filter_summary(filter: &FilterState) -> String {
    let mut parts = Vec::new();

    if !filter.active_tags().is_empty() {
        parts.push(format!("tags: {}", filter.active_tags().join(", ")));
    }
    if let Some(from) = filter.date_from {
        parts.push(format!("from {}", from.format("%Y-%m-%d")));
    }
    if let Some(to) = filter.date_to {
        parts.push(format!("to {}", to.format("%Y-%m-%d")));
    }
    if filter.favorite_only {
        parts.push("favorites only".to_string());
    }

    if parts.is_empty() {
        "no filters".to_string()
    } else {
        parts.join(" · ")
    }
}

/// Status bar widget that displays the most recent message, or the filter
/// summary when no message is active
pub struct StatusBar<'a> {
    /// Active (non-expired) messages
    messages: &'a [&'a StatusMessage],
    /// Current filter state
    filter: &'a FilterState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        filter: &'a FilterState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            messages,
            filter,
            theme,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.clone(), style),
            ])
        } else {
            Line::from(Span::styled(
                filter_summary(self.filter),
                self.theme.dimmed_style(),
            ))
        };

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::parse_date;

    #[test]
    fn test_empty_filter_summary() {
        assert_eq!(filter_summary(&FilterState::new()), "no filters");
    }

    #[test]
    fn test_full_filter_summary() {
        let mut filter = FilterState::new();
        filter.add_tag("rust");
        filter.add_tag("memory");
        filter.date_from = parse_date("2024-01-01");
        filter.favorite_only = true;

        let summary = filter_summary(&filter);
        assert_eq!(
            summary,
            "tags: rust, memory · from 2024-01-01 · favorites only"
        );
    }
}
