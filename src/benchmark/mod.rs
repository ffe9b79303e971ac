//! Benchmark execution engine
//!
//! A run flows through these pieces:
//!
//! 1. **Generators** (`generators.rs`): fresh random input batches per problem.
//! 2. **Measurement** (`measure.rs`): times a variant over a batch and takes
//!    memory snapshots around it (`alloc.rs` supplies the heap counters).
//! 3. **Suites** (`suites.rs`): wire a problem's batch to its variants and
//!    package a summary, optionally annotated by `source.rs`.
//! 4. **Registry** (`registry.rs`): resolves problem ids to suites.

pub mod alloc;
pub mod generators;
pub mod measure;
pub mod registry;
pub mod source;
pub mod suites;

pub use alloc::TrackingAllocator;
pub use measure::{MemorySnapshot, measure};
pub use registry::{Problem, ProblemRegistry};
