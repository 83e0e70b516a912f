//! Structured filter state applied after fuzzy matching
//!
//! Filters are independent conjunctive predicates: active tags (every tag
//! must be present on the item), an optional date range on `time_added`,
//! and a favorite-only flag. An unset filter is a no-op, so the empty
//! state is the identity on any candidate set.

use crate::library::Item;
use chrono::{NaiveDate, NaiveTime};

/// Parse a user-entered `YYYY-MM-DD` date
///
/// Anything that fails to parse yields `None`, which downstream means
/// "filter not active" rather than an error.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Epoch milliseconds of the given date's midnight (UTC)
fn day_start_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Live filter state for a search session
///
/// `active_tags` keeps insertion order (it is the chip display order) and
/// never holds duplicates; mutation goes through [`FilterState::add_tag`]
/// and friends to preserve that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active_tags: Vec<String>,
    /// Keep items added on or after this date
    pub date_from: Option<NaiveDate>,
    /// Keep items added on or before this date (whole day inclusive)
    pub date_to: Option<NaiveDate>,
    /// Keep only favorites
    pub favorite_only: bool,
}

impl FilterState {
    /// Create a new empty filter state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active tags in insertion order
    #[must_use]
    pub fn active_tags(&self) -> &[String] {
        &self.active_tags
    }

    /// Add a tag to the active set
    ///
    /// The tag is trimmed; empty and already-present tags are rejected.
    /// Returns true if the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.active_tags.iter().any(|t| t == tag) {
            return false;
        }
        self.active_tags.push(tag.to_string());
        true
    }

    /// Remove a tag from the active set
    ///
    /// Returns true if the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.active_tags.len();
        self.active_tags.retain(|t| t != tag);
        self.active_tags.len() != before
    }

    /// Remove and return the most recently added tag
    pub fn pop_tag(&mut self) -> Option<String> {
        self.active_tags.pop()
    }

    /// Whether no filter is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_tags.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && !self.favorite_only
    }

    /// Whether an item passes every configured predicate
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        if !self.active_tags.iter().all(|tag| item.has_tag(tag)) {
            return false;
        }

        if let Some(from) = self.date_from
            && item.time_added < day_start_ms(from)
        {
            return false;
        }

        if let Some(to) = self.date_to
            && let Some(next_day) = to.succ_opt()
            && item.time_added >= day_start_ms(next_day)
        {
            return false;
        }

        if self.favorite_only && !item.favorite {
            return false;
        }

        true
    }

    /// Filter ranked candidate indices, preserving their order
    #[must_use]
    pub fn apply(&self, items: &[Item], candidates: &[u32]) -> Vec<u32> {
        if self.is_empty() {
            return candidates.to_vec();
        }

        candidates
            .iter()
            .copied()
            .filter(|&idx| {
                items
                    .get(idx as usize)
                    .is_some_and(|item| self.matches(item))
            })
            .collect()
    }
}
