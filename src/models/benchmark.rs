//! Benchmark result models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of running one variant over a full input batch
///
/// Memory figures are "after minus before" deltas of whole-process counters
/// and may be negative when memory is released during the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    /// Variant label, unique within a summary
    pub label: String,
    /// Wall-clock time for the whole batch in milliseconds (4 decimals)
    pub time_ms: f64,
    /// Resident set size delta in megabytes (2 decimals)
    pub rss_mb: f64,
    /// Virtual memory delta in megabytes (2 decimals)
    pub heap_total_mb: f64,
    /// Live allocated bytes delta in megabytes (2 decimals)
    pub heap_used_mb: f64,
    /// Live large-allocation bytes delta in megabytes (2 decimals)
    pub external_mb: f64,
}

/// Literal source text of one variant, for display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCode {
    pub label: String,
    pub code: String,
}

/// Packaged outcome of running every variant of one problem once
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    /// Unique id of this run
    pub run_id: Uuid,
    /// Registry id of the problem
    pub problem_id: String,
    pub banner_text: String,
    pub title: String,
    /// Number of inputs in the shared batch
    pub test_count: usize,
    pub data_description: String,
    /// One result per variant, in execution order
    pub results: Vec<BenchmarkResult>,
    /// Variant sources, present only when every variant was found
    pub source_code: Option<Vec<SourceCode>>,
    /// Non-fatal annotation problems encountered while building the summary
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl BenchmarkSummary {
    /// Labels of all results, in execution order
    pub fn labels(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.label.as_str()).collect()
    }

    /// Find the source snippet recorded for a variant label
    pub fn source_for(&self, label: &str) -> Option<&SourceCode> {
        self.source_code
            .as_ref()
            .and_then(|sources| sources.iter().find(|s| s.label == label))
    }
}
