//! Algorithm variants under comparison
//!
//! Each problem has a naive and an optimized implementation that must agree
//! on every input. The files are also embedded as text so the reports can
//! show the implementations side by side.

pub mod fair_pairs;
pub mod reverse;
pub mod substring;

pub use fair_pairs::{count_fair_pairs_nested, count_fair_pairs_optimized};
pub use reverse::{reverse_math, reverse_string};
pub use substring::{longest_substring_array, longest_substring_map};

/// Embedded source of the reverse-integer variants
pub const REVERSE_SOURCE: &str = include_str!("reverse.rs");

/// Embedded source of the longest-substring variants
pub const SUBSTRING_SOURCE: &str = include_str!("substring.rs");

/// Embedded source of the fair-pairs variants
pub const FAIR_PAIRS_SOURCE: &str = include_str!("fair_pairs.rs");
