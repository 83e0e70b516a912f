//! Fuzzy matching delegated to nucleo
//!
//! The matcher is constructed once over the full collection. Each item
//! exposes three searchable fields (tags, title, excerpt) which are scored
//! independently; an item's score is the best of the three, giving OR
//! semantics across fields. Two query shapes are supported:
//!
//! - plain text: nucleo's fzf-style pattern syntax (fuzzy by default,
//!   `'term` for exact)
//! - comma-separated terms: each term is matched with exact substring
//!   semantics and the terms are OR-combined

use crate::library::Item;
use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32String};

/// Searchable text for one item, converted to UTF-32 once at startup
struct SearchFields {
    tags: Utf32String,
    title: Utf32String,
    excerpt: Utf32String,
}

impl SearchFields {
    fn from_item(item: &Item) -> Self {
        Self {
            tags: Utf32String::from(item.tags_joined().as_str()),
            title: Utf32String::from(item.title.as_str()),
            excerpt: Utf32String::from(item.excerpt.as_str()),
        }
    }
}

/// Fuzzy matcher over the item collection
///
/// Holds nucleo's scratch state, so `search` takes `&mut self`; this is
/// fine in practice since the whole pipeline runs on one thread.
pub struct ItemMatcher {
    matcher: Matcher,
    fields: Vec<SearchFields>,
}

impl ItemMatcher {
    /// Build the matcher over the full collection
    #[must_use]
    pub fn new(items: &[Item]) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            fields: items.iter().map(SearchFields::from_item).collect(),
        }
    }

    /// Search the collection, returning item indices in relevance order
    ///
    /// An empty query (or one that trims down to nothing) matches every
    /// item in collection order. Ties keep collection order as well, so
    /// ranking is stable across repeated calls.
    pub fn search(&mut self, query: &str) -> Vec<u32> {
        let query = query.trim();

        let patterns = if query.contains(',') {
            query
                .split(',')
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(|term| {
                    Pattern::new(
                        term,
                        CaseMatching::Smart,
                        Normalization::Smart,
                        AtomKind::Substring,
                    )
                })
                .collect::<Vec<_>>()
        } else if query.is_empty() {
            Vec::new()
        } else {
            vec![Pattern::parse(
                query,
                CaseMatching::Smart,
                Normalization::Smart,
            )]
        };

        if patterns.is_empty() {
            #[allow(clippy::cast_possible_truncation)]
            return (0..self.fields.len() as u32).collect();
        }

        let mut scored: Vec<(u32, u32)> = Vec::new();
        for (idx, fields) in self.fields.iter().enumerate() {
            let score = patterns
                .iter()
                .filter_map(|pattern| Self::score_fields(&mut self.matcher, pattern, fields))
                .max();

            if let Some(score) = score {
                #[allow(clippy::cast_possible_truncation)]
                scored.push((idx as u32, score));
            }
        }

        // Stable sort keeps collection order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Best score of a pattern across an item's fields (OR across keys)
    fn score_fields(matcher: &mut Matcher, pattern: &Pattern, fields: &SearchFields) -> Option<u32> {
        [&fields.tags, &fields.title, &fields.excerpt]
            .into_iter()
            .filter_map(|field| pattern.score(field.slice(..), matcher))
            .max()
    }
}
