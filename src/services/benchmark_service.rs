//! Benchmark service - Runs registered problems off the async runtime

use crate::{
    error::AppResult,
    models::BenchmarkSummary,
    state::AppState,
};

/// Benchmark service for request handlers
pub struct BenchmarkService;

impl BenchmarkService {
    /// Run one problem to completion.
    ///
    /// Unknown ids fail before any waiting. Runs are serialized across the
    /// process and execute on the blocking pool.
    pub async fn run(state: &AppState, id: &str) -> AppResult<BenchmarkSummary> {
        let problem_id = state.registry().resolve(id)?.id;

        let registry_state = state.clone();
        run_exclusive(state, move || registry_state.registry().run(problem_id)).await?
    }
}

/// Run `job` on the blocking pool while holding the run lock.
///
/// The guard moves into the blocking task, so a dropped request cannot free
/// the lock while its job is still running.
async fn run_exclusive<T, F>(state: &AppState, job: F) -> AppResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let guard = state.lock_runs().await;
    tracing::debug!("Acquired benchmark slot");

    let output = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        job()
    })
    .await?;

    Ok(output)
}
