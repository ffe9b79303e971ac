//! Presentation of benchmark summaries
//!
//! Renderers only read a [`BenchmarkSummary`](crate::models::BenchmarkSummary);
//! they never modify it.

pub mod comparison;
pub mod export;
pub mod html;
pub mod terminal;

pub use comparison::Comparison;
pub use export::write_results_page;
pub use html::{error_page, index_page, not_found_page, results_page};
pub use terminal::render_terminal;
