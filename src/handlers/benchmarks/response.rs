//! Benchmark response DTOs

use serde::Serialize;

use crate::models::BenchmarkSummary;
use crate::report::Comparison;

/// One registered problem
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemResponse>,
    pub total: usize,
}

/// Completed benchmark run
#[derive(Debug, Serialize)]
pub struct BenchmarkRunResponse {
    #[serde(flatten)]
    pub summary: BenchmarkSummary,
    pub comparison: Option<Comparison>,
}
