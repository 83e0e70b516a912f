//! Application state for the ratatui browser
//!
//! All mutable UI state lives in one [`AppState`] owned by the event loop
//! and passed explicitly to handlers and widgets, never ambient globals.
//! Pipeline state (query results, filters) lives in the search session;
//! this struct covers what the terminal needs on top: focus, cursors,
//! scroll position, transient messages and the chip hit areas recorded at
//! render time for mouse removal.

use crate::search::FilterState;
use crate::ui::input::InputState;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Date/favorite filter overlay is active
    Filter,
}

/// Which input currently receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Free-text search query
    #[default]
    Query,
    /// Tag-entry field (Enter turns the text into a chip)
    TagEntry,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Fields of the filter overlay, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    DateFrom,
    DateTo,
    FavoriteOnly,
}

impl FilterField {
    /// Next field in Tab order, wrapping
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::DateFrom => Self::DateTo,
            Self::DateTo => Self::FavoriteOnly,
            Self::FavoriteOnly => Self::DateFrom,
        }
    }
}

/// State of the date/favorite filter overlay
///
/// Edits happen on text buffers; nothing touches the live filter until
/// the overlay is applied, so cancelling is free.
#[derive(Debug, Clone, Default)]
pub struct FilterOverlayState {
    /// Date-from entry (YYYY-MM-DD)
    pub date_from: InputState,
    /// Date-to entry (YYYY-MM-DD)
    pub date_to: InputState,
    /// Favorite-only toggle
    pub favorite_only: bool,
    /// Currently focused field
    pub focused: FilterField,
}

impl FilterOverlayState {
    /// Build overlay state pre-filled from the live filter
    #[must_use]
    pub fn from_filter(filter: &FilterState) -> Self {
        let fmt = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();
        Self {
            date_from: InputState::with_value(filter.date_from.map(fmt).unwrap_or_default()),
            date_to: InputState::with_value(filter.date_to.map(fmt).unwrap_or_default()),
            favorite_only: filter.favorite_only,
            focused: FilterField::default(),
        }
    }

    /// The input currently focused, if it is a text field
    pub const fn focused_input(&mut self) -> Option<&mut InputState> {
        match self.focused {
            FilterField::DateFrom => Some(&mut self.date_from),
            FilterField::DateTo => Some(&mut self.date_to),
            FilterField::FavoriteOnly => None,
        }
    }
}

/// Application state for the interactive browser
#[derive(Debug, Default)]
pub struct AppState {
    /// Current UI mode
    pub mode: Mode,
    /// Which input has focus in normal mode
    pub focus: Focus,
    /// Search query input (mirrored into the session on every edit)
    pub query: InputState,
    /// Tag-entry input
    pub tag_entry: InputState,
    /// Cursor position in the result list
    pub cursor: usize,
    /// Scroll offset for the result list
    pub scroll_offset: usize,
    /// Entries visible in the result list area (set during render)
    pub visible_height: usize,
    /// Chip hit areas recorded at render time, for mouse removal
    pub chip_areas: Vec<(String, Rect)>,
    /// Transient status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Overlay state while `mode == Mode::Filter`
    pub filter_overlay: Option<FilterOverlayState>,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new() -> Self {
        Self {
            message_ttl: Duration::from_secs(5),
            visible_height: 20, // Default, updated during render
            ..Self::default()
        }
    }

    /// The input that currently receives typed characters
    pub const fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            Focus::Query => &mut self.query,
            Focus::TagEntry => &mut self.tag_entry,
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down within the given result count
    pub const fn cursor_down(&mut self, result_count: usize) {
        if self.cursor + 1 < result_count {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self, result_count: usize) {
        let max_cursor = result_count.saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the result set after it shrinks
    pub fn clamp_cursor(&mut self, result_count: usize) {
        if result_count == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else if self.cursor >= result_count {
            self.cursor = result_count - 1;
            self.adjust_scroll();
        }
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0
            && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor - self.visible_height + 1;
        }
    }

    /// Push a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn prune_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Chip at the given terminal position, if any
    #[must_use]
    pub fn chip_at(&self, column: u16, row: u16) -> Option<&str> {
        self.chip_areas
            .iter()
            .find(|(_, area)| {
                row == area.y && column >= area.x && column < area.x + area.width
            })
            .map(|(tag, _)| tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut state = AppState::new();
        state.cursor_up();
        assert_eq!(state.cursor, 0);

        state.cursor_down(3);
        state.cursor_down(3);
        state.cursor_down(3);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = AppState::new();
        state.visible_height = 2;

        for _ in 0..5 {
            state.cursor_down(10);
        }
        assert_eq!(state.cursor, 5);
        assert_eq!(state.scroll_offset, 4);

        for _ in 0..5 {
            state.cursor_up();
        }
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_clamp_cursor_after_shrink() {
        let mut state = AppState::new();
        for _ in 0..8 {
            state.cursor_down(10);
        }

        state.clamp_cursor(3);
        assert_eq!(state.cursor, 2);

        state.clamp_cursor(0);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = AppState::new();
        state.message_ttl = Duration::from_millis(5);
        state.push_message(MessageLevel::Info, "hello");
        assert_eq!(state.active_messages().len(), 1);

        std::thread::sleep(Duration::from_millis(10));
        assert!(state.active_messages().is_empty());
        state.prune_messages();
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_chip_hit_testing() {
        let mut state = AppState::new();
        state.chip_areas = vec![
            ("rust".to_string(), Rect::new(2, 1, 6, 1)),
            ("go".to_string(), Rect::new(9, 1, 4, 1)),
        ];

        assert_eq!(state.chip_at(3, 1), Some("rust"));
        assert_eq!(state.chip_at(9, 1), Some("go"));
        assert_eq!(state.chip_at(3, 2), None);
        assert_eq!(state.chip_at(14, 1), None);
    }

    #[test]
    fn test_filter_overlay_prefill() {
        let mut filter = FilterState::new();
        filter.date_from = crate::search::parse_date("2024-01-02");
        filter.favorite_only = true;

        let overlay = FilterOverlayState::from_filter(&filter);
        assert_eq!(overlay.date_from.value, "2024-01-02");
        assert!(overlay.date_to.is_empty());
        assert!(overlay.favorite_only);
    }

    #[test]
    fn test_filter_field_tab_order_wraps() {
        let mut field = FilterField::DateFrom;
        field = field.next();
        assert_eq!(field, FilterField::DateTo);
        field = field.next();
        assert_eq!(field, FilterField::FavoriteOnly);
        field = field.next();
        assert_eq!(field, FilterField::DateFrom);
    }
}
