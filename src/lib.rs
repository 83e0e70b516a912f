//! Markr - tag-based bookmark search for the terminal
//!
//! This library provides a search-and-filter pipeline over an immutable
//! in-memory collection of tagged bookmark items: fuzzy text search
//! (delegated to nucleo), structured filtering by tag, date range and
//! favorite flag, debounced interactive refiltering, and a `research://`
//! save handoff to an external application.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod export;
pub mod handoff;
pub mod library;
pub mod output;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MarkrError {
    /// Library loading error
    #[error("Library error: {0}")]
    Library(#[from] library::LibraryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Save handoff error
    #[error("Handoff error: {0}")]
    Handoff(#[from] handoff::HandoffError),
    /// CSV export error
    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
