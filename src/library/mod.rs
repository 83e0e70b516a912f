//! In-memory bookmark collection
//!
//! The library is loaded once per run from a JSON export (an array of
//! [`Item`] records) and stays immutable afterwards. The search pipeline
//! only ever hands out indices into this collection, so every rendered
//! result is guaranteed to be one of the loaded items.

mod error;
mod item;

pub use error::{LibraryError, Result};
pub use item::{EXCERPT_PLACEHOLDER, Item};

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// The loaded item collection, newest first
#[derive(Debug, Clone, Default)]
pub struct Library {
    items: Vec<Item>,
}

impl Library {
    /// Load a collection from a JSON file
    ///
    /// Items are ordered newest first regardless of file order, matching
    /// the order an empty search presents them in.
    ///
    /// # Errors
    /// Returns [`LibraryError::Missing`] if the file does not exist, and
    /// I/O or JSON errors if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LibraryError::Missing(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let items: Vec<Item> = serde_json::from_str(&content)?;
        debug!(count = items.len(), path = %path.display(), "library loaded");

        Ok(Self::from_items(items))
    }

    /// Build a library from items already in memory
    #[must_use]
    pub fn from_items(mut items: Vec<Item>) -> Self {
        items.sort_by(|a, b| b.time_added.cmp(&a.time_added));
        Self { items }
    }

    /// All items, newest first
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at the given collection index
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    /// Number of items in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every distinct tag with its item count, sorted by tag name
    #[must_use]
    pub fn tag_census(&self) -> Vec<(String, usize)> {
        let mut census: BTreeMap<&str, usize> = BTreeMap::new();
        for item in &self.items {
            for tag in &item.tags {
                *census.entry(tag.as_str()).or_default() += 1;
            }
        }

        census
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_items, write_sample_library};

    #[test]
    fn test_load_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_library(dir.path());

        let library = Library::load(&path).unwrap();
        assert_eq!(library.len(), sample_items().len());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Library::load(Path::new("/nonexistent/library.json")).unwrap_err();
        assert!(matches!(err, LibraryError::Missing(_)));
    }

    #[test]
    fn test_items_sorted_newest_first() {
        let library = Library::from_items(sample_items());
        let times: Vec<i64> = library.items().iter().map(|i| i.time_added).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_tag_census_counts() {
        let library = Library::from_items(sample_items());
        let census = library.tag_census();

        let rust = census.iter().find(|(t, _)| t == "rust").unwrap();
        assert_eq!(rust.1, 2);

        // Sorted by tag name
        let names: Vec<&str> = census.iter().map(|(t, _)| t.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"[{"id": 1, "uri": "https://example.com", "title": "t",
            "time_added": 0, "resolved_id": "999", "word_count": 42}]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
    }
}
