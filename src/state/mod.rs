//! Modularized state module.
//!
//! Split into submodules: the search session, the image viewer, and the value
//! types they exchange with the fetch layer. Public re-exports keep the
//! `crate::state::*` API flat.

pub mod session;
pub mod types;
pub mod viewer;

pub use session::SearchSession;
pub use types::{GalleryView, ImageItem, LoadStatus, PageRequest, PageResults};
pub use viewer::Viewer;
