//! Core value types used by Pixsea state.

use crate::sources::FetchError;

/// One image record returned by the data source.
///
/// The session only relies on `id`; every other field is display payload that is
/// carried through untouched. Serialized as-is by `--once --json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ImageItem {
    /// Stable identifier assigned by the data source.
    pub id: u64,
    /// Landing page for the image on the provider's site.
    pub page_url: String,
    /// Small thumbnail suitable for list rendering.
    pub preview_url: String,
    /// Medium-sized rendition (the grid image).
    pub web_format_url: String,
    /// Large rendition shown in the enlarged viewer.
    pub large_image_url: String,
    /// Original width in pixels.
    pub width: u32,
    /// Original height in pixels.
    pub height: u32,
    /// Comma-separated tag list as reported by the provider.
    pub tags: String,
    /// Uploader display name.
    pub user: String,
}

/// Page fetch sent to the background fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Session generation this request was issued under.
    pub id: u64,
    /// Search term the page belongs to.
    pub term: String,
    /// 1-indexed page cursor.
    pub page: u32,
}

/// Completion of a prior [`PageRequest`].
#[derive(Debug)]
pub struct PageResults {
    /// Echoed generation from the originating request.
    pub id: u64,
    /// Echoed search term.
    pub term: String,
    /// Echoed page cursor.
    pub page: u32,
    /// Items in the order received, or the reason the fetch failed.
    pub outcome: Result<Vec<ImageItem>, FetchError>,
}

impl PageResults {
    /// What: Build a completion that echoes the tag of `request`.
    ///
    /// Inputs:
    /// - `request`: Request being answered.
    /// - `outcome`: Items or failure for that request.
    ///
    /// Output: `PageResults` carrying the same generation, term and page.
    #[must_use]
    pub fn for_request(request: &PageRequest, outcome: Result<Vec<ImageItem>, FetchError>) -> Self {
        Self {
            id: request.id,
            term: request.term.clone(),
            page: request.page,
            outcome,
        }
    }
}

/// Loading status of the active search session.
///
/// Replaces a bare loading flag so the display layer can tell "no matches" apart
/// from "the fetch failed".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No term entered, nothing to show.
    #[default]
    Idle,
    /// A page fetch for the current term is outstanding.
    Loading,
    /// The most recent page arrived.
    Loaded,
    /// The most recent page failed; the reason is kept for display.
    Failed(String),
}

impl LoadStatus {
    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Read-only projection the display layer renders from.
#[derive(Clone, Copy, Debug)]
pub struct GalleryView<'a> {
    /// Active search term (may be empty).
    pub term: &'a str,
    /// Accumulated results in insertion order.
    pub items: &'a [ImageItem],
    /// True while a fetch for the current page is outstanding.
    pub loading: bool,
    /// True when at least one item is present.
    pub has_results: bool,
    /// Tagged loading status.
    pub status: &'a LoadStatus,
    /// Next page that `load_more` would request.
    pub page: u32,
    /// Item open in the enlarged viewer, if any.
    pub selection: Option<&'a ImageItem>,
}

impl GalleryView<'_> {
    /// What: Decide whether the "load more" control should be offered.
    ///
    /// Output: `true` when results exist and no fetch is outstanding.
    #[must_use]
    pub const fn can_load_more(&self) -> bool {
        self.has_results && !self.loading
    }

    /// What: Decide whether the full-page loader should be shown.
    ///
    /// Output: `true` while loading with nothing to show yet.
    #[must_use]
    pub const fn show_loader(&self) -> bool {
        self.loading && !self.has_results
    }
}
