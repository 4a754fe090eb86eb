use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::sources::{self, FetchError, ImageSource};
use crate::state::{PageRequest, PageResults};

/// What: Spawn background worker for page fetches.
///
/// Inputs:
/// - `request_rx`: Channel receiver for tagged page requests
/// - `result_tx`: Channel sender for completed pages
/// - `source`: Shared data source
///
/// Details:
/// - Each request runs in its own task, so a superseded fetch never blocks the
///   request that replaced it; the session drops the superseded completion.
/// - A fetch task that panics still reports back, as `FetchError::Aborted`, so
///   every request yields exactly one completion.
/// - Exits once every request sender is dropped.
pub fn spawn_fetch_worker<S: ImageSource>(
    mut request_rx: mpsc::UnboundedReceiver<PageRequest>,
    result_tx: mpsc::UnboundedSender<PageResults>,
    source: Arc<S>,
) {
    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            debug!(term = %request.term, page = request.page, "dispatching page fetch");
            let tx = result_tx.clone();
            let src = Arc::clone(&source);
            let tag = request.clone();
            tokio::spawn(async move {
                let fetch =
                    tokio::spawn(async move { sources::fetch_page(src.as_ref(), request).await });
                let results = match fetch.await {
                    Ok(results) => results,
                    Err(e) => {
                        warn!(
                            term = %tag.term,
                            page = tag.page,
                            error = %e,
                            "page fetch task aborted"
                        );
                        PageResults::for_request(&tag, Err(FetchError::Aborted(e.to_string())))
                    }
                };
                let _ = tx.send(results);
            });
        }
        debug!("fetch worker stopped");
    });
}
