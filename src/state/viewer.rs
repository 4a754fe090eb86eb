//! Enlarged image viewer state.

use tracing::debug;

use crate::state::types::ImageItem;

/// What: Tracks the single item chosen for enlarged viewing.
///
/// - Input: Driven by `select` on item activation and `dismiss` on viewer close.
/// - Output: Informs the renderer whether the viewer is open and for which item.
/// - Details: Independent of the search session; a term change leaves it alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Viewer {
    /// No item selected.
    #[default]
    Closed,
    /// Viewer open on the contained item.
    Open(ImageItem),
}

impl Viewer {
    /// What: Open the viewer on `item`, replacing any current selection.
    ///
    /// Inputs:
    /// - `item`: Item to show; not checked against the current results.
    pub fn select(&mut self, item: ImageItem) {
        debug!(id = item.id, "viewer opened");
        *self = Self::Open(item);
    }

    /// What: Close the viewer and clear the selection.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            debug!("viewer closed");
        }
        *self = Self::Closed;
    }

    /// Item currently shown, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&ImageItem> {
        match self {
            Self::Closed => None,
            Self::Open(item) => Some(item),
        }
    }

    /// Whether the viewer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
