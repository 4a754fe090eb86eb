//! Search session: accumulated results for the active search term.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::state::types::{ImageItem, LoadStatus, PageRequest, PageResults};

/// What: Accumulated result set for one active search term.
///
/// Details:
/// - Owns the term, the page cursor, the result list and the loading status.
/// - Never performs I/O; operations hand back a [`PageRequest`] for the caller to
///   fetch, and completions come back through [`SearchSession::apply_page`].
/// - `generation` changes on every term change so late completions for an older
///   term can be recognised and dropped.
/// - At most one page is in flight; `load_more` is a no-op until it completes.
#[derive(Debug)]
pub struct SearchSession {
    /// Active search term.
    term: String,
    /// Next page to request (1-indexed).
    page: u32,
    /// Accumulated items in insertion order.
    items: Vec<ImageItem>,
    /// Ids already present in `items`.
    seen: HashSet<u64>,
    /// Tagged loading status.
    status: LoadStatus,
    /// Bumped on every term change.
    generation: u64,
    /// Page currently being fetched for `generation`, if any.
    in_flight: Option<u32>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// What: Create an empty session with no term.
    ///
    /// Output: Session in `Idle` status with the page cursor at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: String::new(),
            page: 1,
            items: Vec::new(),
            seen: HashSet::new(),
            status: LoadStatus::Idle,
            generation: 0,
            in_flight: None,
        }
    }

    /// What: Switch the session to a new search term.
    ///
    /// Inputs:
    /// - `term`: Raw search input.
    ///
    /// Output:
    /// - `Some(PageRequest)` for page 1 when the term changed to a non-empty value.
    /// - `None` when the term is unchanged or empty.
    ///
    /// Details:
    /// - An unchanged term leaves everything as is.
    /// - Any change clears the result list, resets the cursor to 1 and supersedes the
    ///   outstanding fetch, if any.
    /// - The empty term is "nothing to show": status becomes `Idle` and no fetch is
    ///   issued. Any other term, whitespace included, is searched as given.
    pub fn set_search_term(&mut self, term: &str) -> Option<PageRequest> {
        if term == self.term {
            debug!(term, "search term unchanged");
            return None;
        }
        self.reset(term);
        if term.is_empty() {
            info!("search term cleared");
            self.status = LoadStatus::Idle;
            return None;
        }
        info!(term, generation = self.generation, "search term changed");
        Some(self.begin_fetch())
    }

    /// What: Request the next unseen page of the current term.
    ///
    /// Output:
    /// - `Some(PageRequest)` for the current cursor.
    /// - `None` when there are no results yet or a fetch is outstanding.
    ///
    /// Details:
    /// - Safe to call repeatedly; only the first call while idle issues a request.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.items.is_empty() {
            debug!("load more ignored: no results");
            return None;
        }
        if self.in_flight.is_some() {
            debug!(page = self.page, "load more ignored: fetch outstanding");
            return None;
        }
        info!(term = %self.term, page = self.page, "loading more results");
        Some(self.begin_fetch())
    }

    /// What: Apply a completed page fetch.
    ///
    /// Inputs:
    /// - `results`: Completion tagged with the generation and page it was issued for.
    ///
    /// Output:
    /// - `true` when the completion belonged to the live session and was applied.
    /// - `false` when it was stale and dropped.
    ///
    /// Details:
    /// - Success appends items in received order, skipping ids already present.
    /// - Failure leaves items unchanged and records `Failed`.
    /// - Either way the in-flight slot clears and the cursor moves past the page, so
    ///   a failed page is skipped rather than retried.
    pub fn apply_page(&mut self, results: PageResults) -> bool {
        if results.id != self.generation || self.in_flight != Some(results.page) {
            debug!(
                term = %results.term,
                page = results.page,
                generation = results.id,
                current = self.generation,
                "discarding stale page"
            );
            return false;
        }
        self.in_flight = None;
        self.page = results.page.saturating_add(1);
        match results.outcome {
            Ok(items) => {
                let received = items.len();
                let before = self.items.len();
                for item in items {
                    if self.seen.insert(item.id) {
                        self.items.push(item);
                    }
                }
                let added = self.items.len() - before;
                if added < received {
                    debug!(duplicates = received - added, "skipped duplicate ids");
                }
                info!(
                    term = %self.term,
                    page = results.page,
                    added,
                    total = self.items.len(),
                    "page applied"
                );
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Active search term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Next page `load_more` would request.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Accumulated items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Whether at least one item is present.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.items.is_empty()
    }

    /// Tagged loading status.
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Reinitialise for `term`, invalidating any outstanding fetch.
    fn reset(&mut self, term: &str) {
        self.term = term.to_string();
        self.generation = self.generation.wrapping_add(1);
        self.page = 1;
        self.items.clear();
        self.seen.clear();
        self.in_flight = None;
    }

    /// Mark the current cursor as in flight and build its request.
    fn begin_fetch(&mut self) -> PageRequest {
        self.in_flight = Some(self.page);
        self.status = LoadStatus::Loading;
        PageRequest {
            id: self.generation,
            term: self.term.clone(),
            page: self.page,
        }
    }
}
