//! Search session: the controller that owns pipeline state
//!
//! A session holds the query text, the structured filter state, the fuzzy
//! matcher and the current result set in one place, so event handlers
//! mutate explicit state instead of ambient globals. `refresh` is the
//! whole pipeline: it reads query and filters at call time, delegates
//! matching, applies the filters and caches the resulting indices for
//! rendering.

use crate::library::{Item, Library};
use crate::search::debounce::Debouncer;
use crate::search::filter::FilterState;
use crate::search::matcher::ItemMatcher;
use std::time::Duration;
use tracing::trace;

/// Pipeline state for one browsing session over a loaded library
pub struct SearchSession<'a> {
    library: &'a Library,
    matcher: ItemMatcher,
    /// Current free-text query
    pub query: String,
    /// Current structured filters
    pub filter: FilterState,
    debouncer: Debouncer,
    results: Vec<u32>,
    generation: u64,
}

impl<'a> SearchSession<'a> {
    /// Create a session with the default debounce interval
    #[must_use]
    pub fn new(library: &'a Library) -> Self {
        Self::with_debounce(library, crate::search::debounce::DEFAULT_DEBOUNCE)
    }

    /// Create a session with a custom debounce interval
    #[must_use]
    pub fn with_debounce(library: &'a Library, delay: Duration) -> Self {
        let mut session = Self {
            library,
            matcher: ItemMatcher::new(library.items()),
            query: String::new(),
            filter: FilterState::new(),
            debouncer: Debouncer::new(delay),
            results: Vec::new(),
            generation: 0,
        };
        session.refresh();
        session
    }

    /// The backing library
    #[must_use]
    pub const fn library(&self) -> &'a Library {
        self.library
    }

    /// Run the pipeline: search with the current query, then filter
    pub fn refresh(&mut self) {
        let ranked = self.matcher.search(&self.query);
        self.results = self.filter.apply(self.library.items(), &ranked);
        self.generation += 1;
        trace!(
            query = %self.query,
            results = self.results.len(),
            generation = self.generation,
            "pipeline refreshed"
        );
    }

    /// Current result indices, in display order
    #[must_use]
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    /// Current result items, in display order
    pub fn result_items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.results
            .iter()
            .filter_map(|&idx| self.library.get(idx as usize))
    }

    /// Counts completed refreshes; render layers use it to detect change
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Request a refresh once input goes idle
    ///
    /// Call on every keystroke; the previously scheduled refresh is
    /// superseded each time.
    pub fn schedule_refresh(&mut self) {
        self.debouncer.poke();
    }

    /// Fire a pending debounced refresh if its idle interval has elapsed
    ///
    /// Returns true if a refresh ran. Called from the event loop tick.
    pub fn tick(&mut self) -> bool {
        if self.debouncer.fire_if_ready() {
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Refresh immediately, superseding any pending debounced refresh
    pub fn refresh_now(&mut self) {
        self.debouncer.cancel();
        self.refresh();
    }

    /// Add an active tag and refresh immediately
    ///
    /// A pending debounced refresh is cancelled: the immediate refresh
    /// supersedes it. Returns false (and does not refresh) for empty or
    /// duplicate tags.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.filter.add_tag(tag) {
            self.debouncer.cancel();
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Remove an active tag and refresh immediately
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        if self.filter.remove_tag(tag) {
            self.debouncer.cancel();
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Remove the most recently added tag and refresh immediately
    pub fn pop_tag(&mut self) -> Option<String> {
        let popped = self.filter.pop_tag();
        if popped.is_some() {
            self.debouncer.cancel();
            self.refresh();
        }
        popped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_library;
    use std::thread::sleep;

    #[test]
    fn test_initial_refresh_shows_everything() {
        let library = sample_library();
        let session = SearchSession::new(&library);
        assert_eq!(session.results().len(), library.len());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_results_are_subset_of_library() {
        let library = sample_library();
        let mut session = SearchSession::new(&library);
        session.query = "rust".to_string();
        session.refresh();

        for &idx in session.results() {
            assert!(library.get(idx as usize).is_some());
        }
    }

    #[test]
    fn test_query_and_filter_combine() {
        let library = sample_library();
        let mut session = SearchSession::new(&library);

        // Empty query matches all; tag + favorite narrow it down
        assert!(session.add_tag("go"));
        session.filter.favorite_only = true;
        session.refresh();

        let titles: Vec<&str> = session.result_items().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Go routines"]);
    }

    #[test]
    fn test_add_tag_refreshes_exactly_once() {
        let library = sample_library();
        let mut session = SearchSession::new(&library);
        let before = session.generation();

        assert!(session.add_tag("python"));
        assert_eq!(session.generation(), before + 1);

        // Duplicate is rejected and does not refresh
        assert!(!session.add_tag("python"));
        assert_eq!(session.generation(), before + 1);
    }

    #[test]
    fn test_debounced_refresh_fires_once() {
        let library = sample_library();
        let mut session = SearchSession::with_debounce(&library, Duration::from_millis(10));
        let before = session.generation();

        // Simulated burst of keystrokes
        for ch in "rust".chars() {
            session.query.push(ch);
            session.schedule_refresh();
            assert!(!session.tick());
        }

        sleep(Duration::from_millis(20));
        assert!(session.tick());
        assert_eq!(session.generation(), before + 1);

        // Idle ticks stay quiet
        assert!(!session.tick());
    }

    #[test]
    fn test_tag_ops_supersede_pending_refresh() {
        let library = sample_library();
        let mut session = SearchSession::with_debounce(&library, Duration::from_millis(10));

        session.schedule_refresh();
        let before = session.generation();
        assert!(session.add_tag("rust"));
        assert_eq!(session.generation(), before + 1);

        // The debounced refresh was cancelled by the immediate one
        sleep(Duration::from_millis(20));
        assert!(!session.tick());
        assert_eq!(session.generation(), before + 1);
    }
}
