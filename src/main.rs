//! Markr CLI application entry point
//!
//! This is the main executable for the markr bookmark search tool. It
//! provides an interactive fuzzy browser over a tagged bookmark library
//! plus scripted variants of the same pipeline, and the save handoff to
//! the external `research://` handler.
//!
//! # Usage
//!
//! ```bash
//! # Browse the library interactively (default command)
//! markr
//! markr browse
//!
//! # List matching items non-interactively
//! markr list rust -t memory --from 2024-01-01 -f
//!
//! # Show the tag census
//! markr tags
//!
//! # Hand the current page off to the external save handler
//! markr save --url https://www.rust-lang.org --tags rust,lang
//!
//! # Export the library to CSV
//! markr export -o bookmarks.csv
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/markr/config.toml` on Linux) and created with defaults on
//! first run.

use markr::{
    MarkrError,
    cli::{Cli, Commands, ExportArgs, HandleArgs, ListArgs, SaveArgs},
    config::MarkrConfig,
    export, handoff,
    handoff::SaveRequest,
    library::Library,
    output,
    search::{FilterState, SearchSession},
    ui,
};
use std::process::ExitCode;
use tracing::debug;

type Result<T> = std::result::Result<T, MarkrError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber; `-v` raises the level, RUST_LOG wins
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("markr={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = MarkrConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match cli.command() {
        Commands::Browse => {
            let library = load_library(cli, &config)?;
            ui::run_browser(&library, &config)?;
            Ok(())
        }
        Commands::List(args) => handle_list(cli, &config, &args, quiet),
        Commands::Tags => handle_tags(cli, &config, quiet),
        Commands::Save(args) => handle_save(&args, &config, quiet),
        Commands::Handle(args) => handle_handle(&args),
        Commands::Export(args) => handle_export(cli, &config, &args, quiet),
    }
}

/// Load the library from the CLI override or the configured path
fn load_library(cli: &Cli, config: &MarkrConfig) -> Result<Library> {
    let path = config.resolve_library(cli.library.as_deref())?;
    Ok(Library::load(&path)?)
}

/// Run the pipeline once and print the results
fn handle_list(cli: &Cli, config: &MarkrConfig, args: &ListArgs, quiet: bool) -> Result<()> {
    let library = load_library(cli, config)?;

    let mut session = SearchSession::new(&library);
    session.query = args.query.clone().unwrap_or_default();
    session.filter = FilterState::from(args);
    session.refresh();

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut shown = 0usize;
    for item in session.result_items().take(limit) {
        println!("{}", output::item_block(item, &config.date_format, quiet));
        shown += 1;
    }

    if !quiet {
        println!("{shown} of {} item(s) shown", session.results().len());
    }
    Ok(())
}

/// Print every tag with its item count
fn handle_tags(cli: &Cli, config: &MarkrConfig, quiet: bool) -> Result<()> {
    let library = load_library(cli, config)?;
    let census = library.tag_census();

    for (tag, count) in &census {
        println!("{}", output::tag_with_count(tag, *count, quiet));
    }
    if !quiet {
        println!("{} tag(s)", census.len());
    }
    Ok(())
}

/// Build the save URI and hand it to the system scheme handler
///
/// When no tags were given on the command line the user is prompted; a
/// cancelled prompt aborts silently, nothing is dispatched.
fn handle_save(args: &SaveArgs, config: &MarkrConfig, quiet: bool) -> Result<()> {
    let tags = match &args.tags {
        Some(tags) => tags.clone(),
        None => match handoff::prompt_tags() {
            Some(tags) => tags,
            None => {
                debug!("tag prompt cancelled, aborting handoff");
                return Ok(());
            }
        },
    };

    let db_path = args
        .db_path
        .clone()
        .or_else(|| config.db_path.clone())
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let request = SaveRequest {
        url: args.url.clone(),
        provider: args.provider,
        tags,
        db_path,
    };
    request.dispatch()?;

    if !quiet {
        println!("Handed off to the {} provider: {}", request.provider, request.url);
    }
    Ok(())
}

/// Parse an inbound research:// URI and print its parts
fn handle_handle(args: &HandleArgs) -> Result<()> {
    let request = SaveRequest::parse(&args.uri)?;
    println!("url:      {}", request.url);
    println!("provider: {}", request.provider);
    println!("tags:     {}", request.tags.join(", "));
    println!("db_path:  {}", request.db_path);
    Ok(())
}

/// Export the library to CSV
fn handle_export(cli: &Cli, config: &MarkrConfig, args: &ExportArgs, quiet: bool) -> Result<()> {
    let library = load_library(cli, config)?;
    let count = export::write_csv(&library, &args.output)?;

    if !quiet {
        println!("Exported {count} item(s) to {}", args.output.display());
    }
    Ok(())
}
