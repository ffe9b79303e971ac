//! AlgoBench - Algorithm Variant Micro-Benchmarking
//!
//! This library runs pairs of alternative algorithm implementations over
//! freshly generated data and compares their time and memory.
//!
//! # Features
//!
//! - Three problems: integer reversal, longest substring without repeats,
//!   and fair-pair counting, each with a naive and an optimized variant
//! - Batch timing with process memory snapshots
//! - Styled terminal reports and an HTML front end
//! - Variant source text shown next to the numbers
//!
//! # Architecture
//!
//! - **Algorithms**: the variants under comparison
//! - **Benchmark**: generators, measurement, suites and the problem registry
//! - **Report**: terminal and HTML rendering
//! - **Handlers / Services**: HTTP surface over the registry

pub mod algorithms;
pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod report;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
