//! Pixsea application runtime.
//!
//! The gallery driver owns the search session and viewer; the fetch worker runs
//! network requests in the background and reports completions back over channels.

/// Consumer-facing gallery driver.
mod gallery;
/// Background page fetch worker.
mod worker;

pub use gallery::Gallery;
pub use worker::spawn_fetch_worker;
