//! Ratatui frontend for the search-and-filter pipeline
//!
//! The UI is a thin shell over [`crate::search::SearchSession`]: widgets
//! render borrowed session state, the event layer mutates it, and the
//! browser loop wires the two together with the debounce tick.
//!
//! # Layout
//!
//! ```text
//! ┌ Search ────────────────────────────────┐
//! │ > query│                               │
//! ├ Tags ──────────────────────────────────┤
//! │  rust ✕   memory ✕  + tag-entry│       │
//! ├ Results (n/total) ─────────────────────┤
//! │ > Title (domain)  date ★               │
//! │     [tags] excerpt                     │
//! │     https://item-uri                   │
//! │   ...                                  │
//! ├ Status ────────────────────────────────┤
//! │ tags: rust, memory · favorites only    │
//! └────────────────────────────────────────┘
//!  TAB:switch field  Enter:open / add tag ...
//! ```

mod browser;
mod error;
mod events;
mod input;
mod state;
mod theme;
mod widgets;

pub use browser::run_browser;
pub use error::{Result, UiError};
pub use events::{EventResult, handle_event};
pub use input::InputState;
pub use state::{AppState, FilterOverlayState, Focus, MessageLevel, Mode, StatusMessage};
pub use theme::Theme;
pub use widgets::filter_summary;
