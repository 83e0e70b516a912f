//! Testing utilities for markr
//!
//! Shared fixtures for unit tests: a small item collection exercising
//! tags, dates, favorites and empty excerpts.
//!
//! Only available when compiled with `cfg(test)`.

use crate::library::{Item, Library};
use std::path::{Path, PathBuf};

/// A small, known collection used across unit tests
///
/// Returned in insertion order (not time order); wrap in
/// [`sample_library`] for the newest-first view.
#[must_use]
pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            uri: "https://doc.rust-lang.org/nomicon/".to_string(),
            title: "Rust memory model".to_string(),
            excerpt: "How the borrow checker thinks about aliasing and ordering.".to_string(),
            tags: vec!["rust".to_string(), "memory".to_string()],
            time_added: 1_700_000_000_000,
            favorite: false,
            lang: Some("en".to_string()),
        },
        Item {
            id: 2,
            uri: "https://go.dev/blog/waza-talk".to_string(),
            title: "Go routines".to_string(),
            excerpt: "Lightweight goroutines and channels.".to_string(),
            tags: vec!["go".to_string(), "concurrency".to_string()],
            time_added: 1_710_000_000_000,
            favorite: true,
            lang: Some("en".to_string()),
        },
        Item {
            id: 3,
            uri: "https://rust-lang.github.io/async-book/".to_string(),
            title: "Rust async book".to_string(),
            excerpt: String::new(),
            tags: vec!["rust".to_string(), "async".to_string()],
            time_added: 1_720_000_000_000,
            favorite: false,
            lang: None,
        },
        Item {
            id: 4,
            uri: "https://css-tricks.com/snippets/css/complete-guide-grid/".to_string(),
            title: "CSS grid guide".to_string(),
            excerpt: "A full walkthrough of grid layout properties.".to_string(),
            tags: vec!["css".to_string(), "web".to_string()],
            time_added: 1_690_000_000_000,
            favorite: true,
            lang: Some("en".to_string()),
        },
    ]
}

/// The sample items as a loaded library (newest first)
#[must_use]
pub fn sample_library() -> Library {
    Library::from_items(sample_items())
}

/// Write the sample collection as JSON into `dir`, returning the path
///
/// # Panics
/// Panics if the file cannot be written; tests treat that as a failed
/// precondition.
pub fn write_sample_library(dir: &Path) -> PathBuf {
    let path = dir.join("library.json");
    let json = serde_json::to_string_pretty(&sample_items()).expect("fixture serializes");
    std::fs::write(&path, json).expect("fixture file writes");
    path
}
