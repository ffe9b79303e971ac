//! Utility functions

pub mod format;

pub use format::{format_count, format_local, round_to};
