//! Consumer-facing gallery driver tying the session, viewer and fetch worker together.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::app::worker::spawn_fetch_worker;
use crate::sources::ImageSource;
use crate::state::{GalleryView, ImageItem, PageRequest, PageResults, SearchSession, Viewer};

/// What: Image gallery the display layer talks to.
///
/// Details:
/// - All state changes happen synchronously on the caller's task; only the network
///   round-trip runs in the background worker.
/// - Completions are applied by `next_update` / `drain_ready`, never behind the
///   caller's back.
/// - Must be created inside a Tokio runtime.
pub struct Gallery {
    /// Accumulated results for the active term.
    session: SearchSession,
    /// Enlarged viewer state.
    viewer: Viewer,
    /// Requests to the fetch worker.
    request_tx: mpsc::UnboundedSender<PageRequest>,
    /// Completions from the fetch worker.
    results_rx: mpsc::UnboundedReceiver<PageResults>,
    /// Requests dispatched but not yet received back (stale ones included).
    pending: usize,
}

impl Gallery {
    /// What: Create a gallery backed by `source` and start its fetch worker.
    ///
    /// Inputs:
    /// - `source`: Data source; its credential is configured by the caller.
    ///
    /// Output: Gallery with no term and a closed viewer.
    #[must_use]
    pub fn new<S: ImageSource>(source: S) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (result_tx, results_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(request_rx, result_tx, Arc::new(source));
        Self {
            session: SearchSession::new(),
            viewer: Viewer::default(),
            request_tx,
            results_rx,
            pending: 0,
        }
    }

    /// What: Change the search term; fetches page 1 when it changed to a non-empty value.
    ///
    /// Inputs:
    /// - `term`: Raw search input (debouncing is the caller's job).
    ///
    /// Details:
    /// - The viewer is left as is; an open item stays open across term changes.
    pub fn set_search_term(&mut self, term: &str) {
        let request = self.session.set_search_term(term);
        self.dispatch(request);
    }

    /// What: Fetch the next page of the current term; no-op while loading or empty.
    pub fn load_more(&mut self) {
        let request = self.session.load_more();
        self.dispatch(request);
    }

    /// What: Open the viewer on `item`.
    pub fn select(&mut self, item: ImageItem) {
        self.viewer.select(item);
    }

    /// What: Open the viewer on the item at `index` in the result list.
    ///
    /// Output:
    /// - `true` when `index` was in range.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(item) = self.session.items().get(index).cloned() else {
            return false;
        };
        self.viewer.select(item);
        true
    }

    /// What: Close the viewer.
    pub fn dismiss(&mut self) {
        self.viewer.dismiss();
    }

    /// What: Wait for the next fetch completion and apply it.
    ///
    /// Output:
    /// - `None` when nothing is outstanding (returns immediately).
    /// - `Some(true)` when the completion was applied, `Some(false)` when it was stale.
    pub async fn next_update(&mut self) -> Option<bool> {
        if self.pending == 0 {
            return None;
        }
        let results = self.results_rx.recv().await?;
        Some(self.apply(results))
    }

    /// What: Apply every completion already delivered without waiting.
    ///
    /// Output: Number of completions applied to the live session.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(results) = self.results_rx.try_recv() {
            if self.apply(results) {
                applied += 1;
            }
        }
        applied
    }

    /// What: Whether any dispatched fetch has not come back yet.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending > 0
    }

    /// What: Projection the display layer renders from.
    #[must_use]
    pub fn view(&self) -> GalleryView<'_> {
        GalleryView {
            term: self.session.term(),
            items: self.session.items(),
            loading: self.session.is_loading(),
            has_results: self.session.has_results(),
            status: self.session.status(),
            page: self.session.page(),
            selection: self.viewer.selection(),
        }
    }

    /// Hand a request to the worker, if one was issued.
    fn dispatch(&mut self, request: Option<PageRequest>) {
        let Some(request) = request else {
            return;
        };
        if self.request_tx.send(request).is_err() {
            warn!("fetch worker is gone; request dropped");
            return;
        }
        self.pending += 1;
    }

    /// Route one completion into the session.
    fn apply(&mut self, results: PageResults) -> bool {
        self.pending = self.pending.saturating_sub(1);
        self.session.apply_page(results)
    }
}
