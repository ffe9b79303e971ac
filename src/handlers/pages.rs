//! HTML page handlers

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::{error::AppError, report, services::BenchmarkService, state::AppState};

/// Landing page
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(report::index_page(state.registry().problems()))
}

/// Run a benchmark and render the results page
async fn benchmark_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match BenchmarkService::run(&state, &id).await {
        Ok(summary) => Html(report::results_page(&summary)).into_response(),
        Err(AppError::UnknownProblem(id)) => (
            StatusCode::NOT_FOUND,
            Html(report::not_found_page(Some(&id))),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(problem = %id, "Benchmark failed: {}", e);
            (
                e.status_code(),
                Html(report::error_page(&e.public_message())),
            )
                .into_response()
        }
    }
}

/// Fallback for unmatched paths
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(report::not_found_page(None)))
}

/// Page routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/benchmark/{id}", get(benchmark_page))
}
