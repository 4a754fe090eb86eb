//! Library entry for Pixsea exposing the search core for the binary and integration tests.

pub mod app;
pub mod config;
pub mod sources;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_utils;
