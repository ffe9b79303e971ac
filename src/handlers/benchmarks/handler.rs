//! Benchmark handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult, report::Comparison, services::BenchmarkService, state::AppState,
};

use super::response::{BenchmarkRunResponse, ProblemResponse, ProblemsListResponse};

/// List all registered problems
pub async fn list_benchmarks(State(state): State<AppState>) -> Json<ProblemsListResponse> {
    let problems: Vec<ProblemResponse> = state
        .registry()
        .problems()
        .iter()
        .map(|p| ProblemResponse {
            id: p.id.to_string(),
            label: p.display_name(),
            url: format!("/api/v1/benchmarks/{}", p.id),
        })
        .collect();

    Json(ProblemsListResponse {
        total: problems.len(),
        problems,
    })
}

/// Run a benchmark and return its summary
pub async fn run_benchmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BenchmarkRunResponse>> {
    let summary = BenchmarkService::run(&state, &id).await?;
    let comparison = Comparison::from_results(&summary.results);

    Ok(Json(BenchmarkRunResponse {
        summary,
        comparison,
    }))
}
