//! Output formatting for CLI display
//!
//! This module provides utilities for formatting items and tags for the
//! non-interactive commands. Quiet mode strips everything but the data a
//! script would consume.

use crate::library::Item;
use colored::Colorize;

/// Format one item as a display block
///
/// Quiet mode prints just the URI; otherwise a multi-line block with
/// title, source domain, date, tags and excerpt.
#[must_use]
pub fn item_block(item: &Item, date_format: &str, quiet: bool) -> String {
    if quiet {
        return item.uri.clone();
    }

    let mut lines = Vec::new();

    let heading = match item.domain() {
        Some(domain) => format!("{} {}", item.title.bold(), format!("({domain})").dimmed()),
        None => item.title.bold().to_string(),
    };
    lines.push(heading);

    let mut meta = item.format_time_added(date_format);
    if item.favorite {
        meta.push_str(" ★");
    }
    lines.push(format!("  {}", meta.dimmed()));

    if !item.tags.is_empty() {
        lines.push(format!("  [{}]", item.tags.join(", ").magenta()));
    }

    lines.push(format!("  {}", item.excerpt_or_placeholder()));
    lines.push(format!("  {}", item.uri.blue().underline()));

    lines.join("\n")
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count} item(s))")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_items;

    #[test]
    fn test_item_block_contains_fields() {
        let item = &sample_items()[0];
        let block = item_block(item, "%Y-%m-%d", false);

        assert!(block.contains(&item.title));
        assert!(block.contains("doc.rust-lang.org"));
        assert!(block.contains("2023-11-14"));
        assert!(block.contains("rust, memory"));
        assert!(block.contains(&item.uri));
    }

    #[test]
    fn test_item_block_quiet_is_uri_only() {
        let item = &sample_items()[0];
        assert_eq!(item_block(item, "%Y-%m-%d", true), item.uri);
    }

    #[test]
    fn test_empty_excerpt_uses_placeholder() {
        let mut item = sample_items()[0].clone();
        item.excerpt.clear();
        let block = item_block(&item, "%Y-%m-%d", false);
        assert!(block.contains("No excerpt available"));
    }

    #[test]
    fn test_favorite_marker() {
        let items = sample_items();
        let favorite = items.iter().find(|i| i.favorite).unwrap();
        assert!(item_block(favorite, "%Y-%m-%d", false).contains('★'));
    }

    #[test]
    fn test_tag_with_count() {
        assert_eq!(tag_with_count("rust", 3, false), "  rust (3 item(s))");
        assert_eq!(tag_with_count("rust", 3, true), "rust");
    }
}
