//! Request logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Log every request with its status and how long it took.
///
/// Benchmark runs are expected to be slow, so they log at `info` with the
/// problem id instead of being treated as outliers.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);
    let problem = benchmark_id(&path);

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else if let Some(problem) = problem {
        info!(
            method = %method,
            problem = %problem,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Benchmark request completed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}

/// Problem id of a benchmark-running path, if it is one
fn benchmark_id(path: &str) -> Option<&str> {
    path.strip_prefix("/benchmark/")
        .or_else(|| path.strip_prefix("/api/v1/benchmarks/"))
        .filter(|id| !id.is_empty() && !id.contains('/'))
}
