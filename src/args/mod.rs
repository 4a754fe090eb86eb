//! Command-line argument parsing and handling.

pub mod definition;

pub use definition::{Args, apply_overrides, determine_log_level};
