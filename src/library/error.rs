//! Library error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying the item collection
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Collection file does not exist
    #[error("Library file not found: {0}")]
    Missing(PathBuf),

    /// I/O error reading the collection file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection file is not valid JSON
    #[error("Invalid library JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, LibraryError>;
