//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::benchmark::ProblemRegistry;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Runnable problems
    registry: ProblemRegistry,

    /// Held for the duration of a run so memory deltas are not shared
    run_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                registry: ProblemRegistry::new(config.benchmark),
                run_lock: Arc::new(Mutex::new(())),
            }),
        }
    }

    /// Get a reference to the problem registry
    pub fn registry(&self) -> &ProblemRegistry {
        &self.inner.registry
    }

    /// Wait until no other benchmark is running.
    ///
    /// The guard is owned so it can travel with the run onto the blocking
    /// pool and outlive the request that started it.
    pub async fn lock_runs(&self) -> OwnedMutexGuard<()> {
        Arc::clone(&self.inner.run_lock).lock_owned().await
    }
}
