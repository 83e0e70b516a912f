//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The library is empty, nothing to browse
    #[error("Nothing to browse: the library is empty")]
    EmptyLibrary,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
