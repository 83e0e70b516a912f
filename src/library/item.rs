//! Bookmark item data model
//!
//! Pure data structures with minimal logic. Items are immutable for the
//! lifetime of the process: the collection is loaded once and never mutated
//! by the search pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of an empty excerpt
pub const EXCERPT_PLACEHOLDER: &str = "No excerpt available";

/// A single tagged bookmark record
///
/// Mirrors the collection export format: unknown fields are ignored and
/// optional fields default so partial records still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: i64,

    /// Original location of the bookmarked page
    pub uri: String,

    /// Page title
    pub title: String,

    /// Short description, may be empty
    #[serde(default)]
    pub excerpt: String,

    /// Tags attached to this item (membership matters, order does not)
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the item was added, epoch milliseconds
    pub time_added: i64,

    /// Whether the item is marked as a favorite
    #[serde(default)]
    pub favorite: bool,

    /// Detected language of the page, if any
    #[serde(default)]
    pub lang: Option<String>,
}

impl Item {
    /// Check whether a tag is attached to this item (exact membership)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Host name of the item's URI, e.g. "www.rust-lang.org"
    ///
    /// Returns `None` for URIs that fail to parse or carry no host.
    #[must_use]
    pub fn domain(&self) -> Option<String> {
        url::Url::parse(&self.uri)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
    }

    /// Excerpt text, falling back to a placeholder when empty
    #[must_use]
    pub fn excerpt_or_placeholder(&self) -> &str {
        if self.excerpt.is_empty() {
            EXCERPT_PLACEHOLDER
        } else {
            &self.excerpt
        }
    }

    /// Format `time_added` with the given chrono format string
    ///
    /// Items with an out-of-range timestamp render as an empty string.
    #[must_use]
    pub fn format_time_added(&self, format: &str) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.time_added)
            .map(|dt| dt.format(format).to_string())
            .unwrap_or_default()
    }

    /// Tags joined for display and matching
    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.tags.join(" ")
    }
}
