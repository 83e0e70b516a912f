//! Interactive browser event loop
//!
//! Hosts the search session in a ratatui terminal: draw, poll with a
//! short tick, dispatch events, and let the debouncer fire once typing
//! goes idle. The result list is fully rebuilt every frame from the
//! session's current results.

use crate::config::MarkrConfig;
use crate::library::{Item, Library};
use crate::search::SearchSession;
use crate::ui::error::{Result, UiError};
use crate::ui::events::{EventResult, handle_event};
use crate::ui::state::{AppState, Focus, MessageLevel, Mode};
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    FilterOverlay, HelpBar, ItemList, KeyHint, ROWS_PER_ENTRY, SearchBar, StatusBar, TagChips,
};
use crossterm::{
    event,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Poll timeout; bounds how late a debounced refresh can fire
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the interactive browser over a loaded library
///
/// # Errors
/// Returns [`UiError::EmptyLibrary`] when there is nothing to browse, and
/// I/O errors from the terminal.
pub fn run_browser(library: &Library, config: &MarkrConfig) -> Result<()> {
    if library.is_empty() {
        return Err(UiError::EmptyLibrary);
    }

    let mut terminal = setup_terminal()?;
    let result = browse_loop(&mut terminal, library, config);
    cleanup_terminal()?;
    result
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// The main event loop
fn browse_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    library: &Library,
    config: &MarkrConfig,
) -> Result<()> {
    let mut session = SearchSession::with_debounce(library, config.debounce());
    let mut state = AppState::new();
    let theme = Theme::default();
    let hints = HelpBar::default_hints();

    loop {
        state.prune_messages();
        state.clamp_cursor(session.results().len());

        terminal.draw(|frame| {
            render(frame, &mut state, &session, &theme, &hints, &config.date_format);
        })?;

        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            let result_count = session.results().len();

            match handle_event(&mut state, &mut session.filter, &ev, result_count) {
                EventResult::QueryChanged => {
                    // The pipeline reads the query at refresh time
                    session.query.clone_from(&state.query.value);
                    session.schedule_refresh();
                }
                EventResult::FilterChanged => {
                    session.refresh_now();
                    state.clamp_cursor(session.results().len());
                }
                EventResult::Open => open_selected(&mut state, &session),
                EventResult::Abort => break,
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        // Fire a pending debounced refresh once input has gone idle
        if session.tick() {
            state.clamp_cursor(session.results().len());
        }

        if state.should_exit {
            break;
        }
    }

    Ok(())
}

/// Open the highlighted item's URI with the system handler
fn open_selected(state: &mut AppState, session: &SearchSession) {
    let item = session
        .results()
        .get(state.cursor)
        .and_then(|&idx| session.library().get(idx as usize));

    let Some(item) = item else {
        return;
    };

    match open::that(&item.uri) {
        Ok(()) => state.push_message(MessageLevel::Success, format!("Opened {}", item.uri)),
        Err(e) => state.push_message(MessageLevel::Error, format!("Failed to open: {e}")),
    }
}

/// Render the UI
fn render(
    frame: &mut Frame,
    state: &mut AppState,
    session: &SearchSession,
    theme: &Theme,
    hints: &[KeyHint],
    date_format: &str,
) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Tag chips
            Constraint::Min(4),    // Result list
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    // Entries visible inside the list borders
    state.visible_height =
        (main_layout[2].height.saturating_sub(2) as usize / ROWS_PER_ENTRY).max(1);

    let in_normal_mode = state.mode == Mode::Normal;

    let search_bar = SearchBar::new(&state.query, ">", theme)
        .focused(in_normal_mode && state.focus == Focus::Query);
    frame.render_widget(search_bar, main_layout[0]);

    // The chips widget records hit areas for mouse removal
    let mut chip_areas = std::mem::take(&mut state.chip_areas);
    let chips = TagChips::new(
        session.filter.active_tags(),
        &state.tag_entry,
        theme,
        &mut chip_areas,
    )
    .focused(in_normal_mode && state.focus == Focus::TagEntry);
    frame.render_widget(chips, main_layout[1]);
    state.chip_areas = chip_areas;

    let items: Vec<&Item> = session.result_items().collect();
    let item_list = ItemList::new(
        &items,
        state.cursor,
        state.scroll_offset,
        session.library().len(),
        date_format,
        theme,
    );
    frame.render_widget(item_list, main_layout[2]);

    let messages = state.active_messages();
    let status_bar = StatusBar::new(&messages, &session.filter, theme);
    frame.render_widget(status_bar, main_layout[3]);

    frame.render_widget(HelpBar::new(hints, theme), main_layout[4]);

    if let Some(overlay) = &state.filter_overlay
        && state.mode == Mode::Filter
    {
        frame.render_widget(FilterOverlay::new(overlay, theme), area);
    }
}
