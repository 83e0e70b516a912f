//! Search-and-filter pipeline
//!
//! The pipeline is: free-text query -> fuzzy matcher ([`ItemMatcher`],
//! delegating to nucleo) -> ranked candidate indices -> structured filters
//! ([`FilterState`]: tags, date range, favorite) -> render. It is
//! UI-agnostic: [`SearchSession`] owns the whole pipeline state and is
//! driven by whichever frontend hosts it (the ratatui browser or the
//! non-interactive `list` command).

pub mod debounce;
pub mod filter;
pub mod matcher;
pub mod session;

pub use debounce::Debouncer;
pub use filter::{FilterState, parse_date};
pub use matcher::ItemMatcher;
pub use session::SearchSession;
