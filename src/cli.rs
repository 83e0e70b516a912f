//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for markr using the
//! `clap` crate. The default command is `browse`, the interactive fuzzy
//! search; the remaining commands cover scripted use of the same pipeline
//! (`list`, `tags`, `export`) and the save handoff (`save`, `handle`).
//!
//! # Commands
//!
//! - **browse**: interactive search over the library (default)
//! - **list**: non-interactive filtered listing
//! - **tags**: tag census with item counts
//! - **save**: build a `research://save` URI and open it
//! - **handle**: parse an inbound `research://` URI
//! - **export**: write the library to CSV

use crate::handoff::Provider;
use crate::search::{FilterState, parse_date};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level argument parser
#[derive(Debug, Parser)]
#[command(name = "markr", version, about, long_about = None)]
pub struct Cli {
    /// Path to the library JSON file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub library: Option<PathBuf>,

    /// Only output results, suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to `browse`
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Search the library interactively (default)
    #[command(alias = "b")]
    Browse,

    /// List items non-interactively with optional filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show every tag with its item count
    #[command(alias = "t")]
    Tags,

    /// Hand a page URL off to the external save handler
    Save(SaveArgs),

    /// Parse an inbound research:// URI and print its parts
    Handle(HandleArgs),

    /// Export the library to CSV
    Export(ExportArgs),
}

/// Arguments for the list command
#[derive(Debug, Clone, Args, Default)]
pub struct ListArgs {
    /// Free-text query run through the fuzzy matcher
    pub query: Option<String>,

    /// Keep items carrying ALL of these tags
    /// Example: --tag rust,memory
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub tag: Vec<String>,

    /// Keep only favorites
    #[arg(short, long)]
    pub favorite: bool,

    /// Keep items added on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Keep items added on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Show at most this many items
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl From<&ListArgs> for FilterState {
    fn from(args: &ListArgs) -> Self {
        let mut filter = Self::new();
        for tag in &args.tag {
            filter.add_tag(tag);
        }
        // Dates that fail to parse leave the filter inactive
        filter.date_from = args.from.as_deref().and_then(parse_date);
        filter.date_to = args.to.as_deref().and_then(parse_date);
        filter.favorite_only = args.favorite;
        filter
    }
}

/// Arguments for the save command
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Page URL to save
    #[arg(short, long)]
    pub url: String,

    /// Tags to attach; prompted for interactively when omitted
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub tags: Option<Vec<String>>,

    /// Storage backend the handler should use
    #[arg(short, long, value_enum, default_value_t = Provider::Local)]
    pub provider: Provider,

    /// Database path for the handler (defaults to the configured one)
    #[arg(long, value_name = "FILE")]
    pub db_path: Option<PathBuf>,
}

/// Arguments for the handle command
#[derive(Debug, Clone, Args)]
pub struct HandleArgs {
    /// The research:// URI to parse
    pub uri: String,
}

/// Arguments for the export command
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output CSV path
    #[arg(short, long, default_value = "markr_export.csv")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = Cli::try_parse_from(["markr"]).unwrap();
        assert!(matches!(cli.command(), Commands::Browse));
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::try_parse_from([
            "markr", "list", "rust", "-t", "rust,memory", "-f", "--from", "2024-01-01", "-n", "5",
        ])
        .unwrap();

        let Commands::List(args) = cli.command() else {
            panic!("expected list command");
        };
        assert_eq!(args.query.as_deref(), Some("rust"));
        assert_eq!(args.tag, ["rust", "memory"]);
        assert!(args.favorite);
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_list_args_to_filter_state() {
        let args = ListArgs {
            query: None,
            tag: vec!["rust".to_string(), "rust".to_string()],
            favorite: true,
            from: Some("2024-01-01".to_string()),
            to: Some("garbage".to_string()),
            limit: None,
        };

        let filter = FilterState::from(&args);
        assert_eq!(filter.active_tags(), ["rust"]);
        assert!(filter.favorite_only);
        assert!(filter.date_from.is_some());
        // Unparseable date degrades to no filter
        assert!(filter.date_to.is_none());
    }

    #[test]
    fn test_save_args() {
        let cli = Cli::try_parse_from([
            "markr",
            "save",
            "--url",
            "https://example.com",
            "--tags",
            "a,b",
            "--provider",
            "pocket",
        ])
        .unwrap();

        let Commands::Save(args) = cli.command() else {
            panic!("expected save command");
        };
        assert_eq!(args.url, "https://example.com");
        assert_eq!(
            args.tags.as_deref(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(args.provider, Provider::Pocket);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["markr", "tags", "-q", "-l", "/tmp/lib.json"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.library, Some(PathBuf::from("/tmp/lib.json")));
    }
}
