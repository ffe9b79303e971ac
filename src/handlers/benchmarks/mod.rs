//! Benchmark JSON API handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Benchmark routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_benchmarks))
        .route("/{id}", get(handler::run_benchmark))
}
