//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted result row
    pub selection_bg: Color,
    /// Foreground color for the highlighted result row
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for borders of the focused pane
    pub focused_border: Color,
    /// Color for dimmed/secondary text
    pub dimmed: Color,
    /// Color for tag chips
    pub tag: Color,
    /// Color for source domains and links
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            focused_border: Color::Cyan,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            link: Color::Blue,
        }
    }

    /// Style for the highlighted result row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for ordinary text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused pane's border
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.focused_border)
    }

    /// Style for dimmed/secondary text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for tag text
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for removable tag chips
    #[must_use]
    pub fn chip_style(&self) -> Style {
        Style::default().fg(self.selection_fg).bg(self.tag)
    }

    /// Style for source domains and links
    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default().fg(self.link)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }
}
