//! Image data sources and the page fetch boundary.

use std::future::Future;

use tracing::{debug, warn};

use crate::state::{ImageItem, PageRequest, PageResults};

mod pixabay;

pub use pixabay::PixabaySource;

/// What: Failure reported by an image data source.
///
/// Details:
/// - Caught at the fetch boundary; the session records it as `LoadStatus::Failed`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No API key configured for the source.
    #[error("no API key configured")]
    MissingCredential,
    /// Network failure, timeout, or client construction error.
    ///
    /// The request URL (which carries the API key) is stripped on conversion.
    #[error("network error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status.
    #[error("search service returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// Response body was not the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The fetch task ended without producing a result (panic or cancellation).
    #[error("fetch task aborted: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

/// What: Remote image search backend.
///
/// Details:
/// - `fetch_page` returns the items for `query` at 1-indexed `page`, in provider order.
/// - Implementations must be shareable across worker tasks.
pub trait ImageSource: Send + Sync + 'static {
    /// Fetch one page of results for `query`.
    fn fetch_page(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Vec<ImageItem>, FetchError>> + Send;
}

/// What: Perform the fetch for `request` and package the outcome for the session.
///
/// Inputs:
/// - `source`: Data source to query.
/// - `request`: Tagged page request issued by the session.
///
/// Output:
/// - `PageResults` echoing the request tag, with items or the failure.
///
/// Details:
/// - Failures are logged here and travel onward as values; nothing is retried.
pub async fn fetch_page<S: ImageSource>(source: &S, request: PageRequest) -> PageResults {
    let outcome = source.fetch_page(&request.term, request.page).await;
    match &outcome {
        Ok(items) => debug!(
            term = %request.term,
            page = request.page,
            count = items.len(),
            "page fetched"
        ),
        Err(e) => warn!(
            term = %request.term,
            page = request.page,
            error = %e,
            "page fetch failed"
        ),
    }
    PageResults::for_request(&request, outcome)
}
