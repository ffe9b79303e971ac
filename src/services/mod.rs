//! Business logic services
//!
//! Services sit between the HTTP handlers and the benchmark engine.

pub mod benchmark_service;

pub use benchmark_service::BenchmarkService;
