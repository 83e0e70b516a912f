//! CSV export of the item collection
//!
//! One row per item with tags comma-joined, suitable for import into
//! other bookmark managers.

use crate::library::Library;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writing failed (covers the underlying I/O)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the whole collection to a CSV file
///
/// Returns the number of exported items.
///
/// # Errors
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn write_csv(library: &Library, path: &Path) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "id",
        "uri",
        "title",
        "excerpt",
        "tags",
        "time_added",
        "favorite",
        "lang",
    ])?;

    for item in library.items() {
        writer.write_record([
            item.id.to_string().as_str(),
            &item.uri,
            &item.title,
            &item.excerpt,
            &item.tags.join(","),
            item.time_added.to_string().as_str(),
            if item.favorite { "true" } else { "false" },
            item.lang.as_deref().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    debug!(count = library.len(), path = %path.display(), "library exported");
    Ok(library.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_library;

    #[test]
    fn test_export_writes_all_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let library = sample_library();

        let count = write_csv(&library, &path).unwrap();
        assert_eq!(count, library.len());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), library.len());
    }

    #[test]
    fn test_export_joins_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let library = sample_library();

        write_csv(&library, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("rust,memory") || content.contains("\"rust,memory\""));
    }
}
