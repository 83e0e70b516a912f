//! Event handling for the ratatui browser
//!
//! Maps keyboard and mouse events to state mutations and tells the event
//! loop what kind of change happened: query edits are debounced, filter
//! edits (chips, dates, favorite) re-run the pipeline immediately.

use crate::search::{FilterState, parse_date};
use crate::ui::state::{AppState, FilterField, FilterOverlayState, Focus, Mode};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query text changed; schedule a debounced refresh
    QueryChanged,
    /// Filter state changed; refresh immediately
    FilterChanged,
    /// Open the currently highlighted item
    Open,
    /// Exit the browser
    Abort,
    /// No action taken
    Ignored,
}

/// Handle a terminal event against the current state
pub fn handle_event(
    state: &mut AppState,
    filter: &mut FilterState,
    event: &Event,
    result_count: usize,
) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match state.mode {
            Mode::Normal => handle_normal_mode(state, filter, *key, result_count),
            Mode::Filter => handle_filter_mode(state, filter, *key),
        },
        Event::Mouse(mouse) => handle_mouse(state, filter, *mouse, result_count),
        _ => EventResult::Ignored,
    }
}

/// Handle events in normal mode
fn handle_normal_mode(
    state: &mut AppState,
    filter: &mut FilterState,
    key: KeyEvent,
    result_count: usize,
) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,

        // Accept: open item from the query field, make a chip from the tag field
        (KeyCode::Enter, _) => match state.focus {
            Focus::Query => {
                if result_count == 0 {
                    EventResult::Ignored
                } else {
                    EventResult::Open
                }
            }
            Focus::TagEntry => {
                let entry = state.tag_entry.value.clone();
                state.tag_entry.clear();
                if filter.add_tag(&entry) {
                    EventResult::FilterChanged
                } else {
                    EventResult::Continue
                }
            }
        },

        // Focus switching
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
            state.focus = match state.focus {
                Focus::Query => Focus::TagEntry,
                Focus::TagEntry => Focus::Query,
            };
            EventResult::Continue
        }

        // Date/favorite filter overlay
        (KeyCode::F(2), _) => {
            state.filter_overlay = Some(FilterOverlayState::from_filter(filter));
            state.mode = Mode::Filter;
            EventResult::Continue
        }

        // Quick favorite-only toggle
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            filter.favorite_only = !filter.favorite_only;
            EventResult::FilterChanged
        }

        // Result list navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down(result_count);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down(result_count);
            EventResult::Continue
        }

        // Input editing in the focused field
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.focused_input_mut().insert(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => match state.focus {
            Focus::TagEntry if state.tag_entry.is_empty() => {
                // Keyboard fallback for chip removal
                if filter.pop_tag().is_some() {
                    EventResult::FilterChanged
                } else {
                    EventResult::Ignored
                }
            }
            _ => {
                if state.focused_input_mut().is_empty() {
                    EventResult::Ignored
                } else {
                    state.focused_input_mut().backspace();
                    EventResult::QueryChanged
                }
            }
        },
        (KeyCode::Delete, _) => {
            state.focused_input_mut().delete();
            EventResult::QueryChanged
        }
        (KeyCode::Left, _) => {
            state.focused_input_mut().move_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.focused_input_mut().move_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.focused_input_mut().move_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.focused_input_mut().move_end();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.focused_input_mut().clear();
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the filter overlay is open
fn handle_filter_mode(state: &mut AppState, filter: &mut FilterState, key: KeyEvent) -> EventResult {
    let Some(overlay) = state.filter_overlay.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Ignored;
    };

    match (key.code, key.modifiers) {
        // Close without applying
        (KeyCode::Esc, _) => {
            state.filter_overlay = None;
            state.mode = Mode::Normal;
            EventResult::Continue
        }

        // Apply: unparseable or empty dates leave that filter unset
        (KeyCode::Enter, _) => {
            filter.date_from = parse_date(&overlay.date_from.value);
            filter.date_to = parse_date(&overlay.date_to.value);
            filter.favorite_only = overlay.favorite_only;
            state.filter_overlay = None;
            state.mode = Mode::Normal;
            EventResult::FilterChanged
        }

        // Field cycling
        (KeyCode::Tab | KeyCode::Down, _) => {
            overlay.focused = overlay.focused.next();
            EventResult::Continue
        }

        // Toggle the checkbox
        (KeyCode::Char(' '), _) if overlay.focused == FilterField::FavoriteOnly => {
            overlay.favorite_only = !overlay.favorite_only;
            EventResult::Continue
        }

        // Text editing in the focused date field
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            if let Some(input) = overlay.focused_input() {
                input.insert(c);
            }
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if let Some(input) = overlay.focused_input() {
                input.backspace();
            }
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            if let Some(input) = overlay.focused_input() {
                input.move_left();
            }
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            if let Some(input) = overlay.focused_input() {
                input.move_right();
            }
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events: chip removal and list scrolling
fn handle_mouse(
    state: &mut AppState,
    filter: &mut FilterState,
    mouse: MouseEvent,
    result_count: usize,
) -> EventResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let clicked = state
                .chip_at(mouse.column, mouse.row)
                .map(str::to_string);
            match clicked {
                Some(tag) if filter.remove_tag(&tag) => EventResult::FilterChanged,
                _ => EventResult::Ignored,
            }
        }
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down(result_count);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}
