//! Writing results pages to disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;
use crate::models::BenchmarkSummary;

use super::html::results_page;

/// Write the results page for `summary` to `<dir>/<problem_id>.html`,
/// creating `dir` if needed. Returns the written path.
pub fn write_results_page(dir: &Path, summary: &BenchmarkSummary) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.html", summary.problem_id));
    fs::write(&path, results_page(summary))?;

    tracing::info!(path = %path.display(), "Results page written");
    Ok(path)
}
