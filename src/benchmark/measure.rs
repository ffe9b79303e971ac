//! Batch timing and memory measurement
//!
//! The memory figures are whole-process counters sampled before and after
//! the batch. They are a coarse heuristic: anything else the process does
//! while the batch runs is attributed to the variant.

use std::hint::black_box;
use std::time::Instant;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::constants::{BYTES_PER_MB, MEMORY_PRECISION, TIME_PRECISION};
use crate::models::BenchmarkResult;
use crate::utils::round_to;

use super::alloc;

/// Point-in-time view of process memory, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub rss: u64,
    pub virtual_memory: u64,
    pub heap_used: u64,
    pub heap_large: u64,
}

impl MemorySnapshot {
    /// Sample the current process
    pub fn capture() -> Self {
        let (rss, virtual_memory) = process_memory().unwrap_or_default();

        Self {
            rss,
            virtual_memory,
            heap_used: alloc::allocated_bytes() as u64,
            heap_large: alloc::large_allocated_bytes() as u64,
        }
    }
}

fn process_memory() -> Option<(u64, u64)> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );
    system
        .process(pid)
        .map(|process| (process.memory(), process.virtual_memory()))
}

/// Signed byte delta converted to megabytes at report precision
fn delta_mb(before: u64, after: u64) -> f64 {
    let delta = after as f64 - before as f64;
    round_to(delta / BYTES_PER_MB, MEMORY_PRECISION)
}

/// Run `f` once per input, in order, and report elapsed time and memory deltas.
///
/// Return values pass through [`black_box`] and are then dropped. A panic in
/// `f` is not caught and aborts the whole measurement.
pub fn measure<I, F, R>(label: &str, mut f: F, inputs: I) -> BenchmarkResult
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    let inputs = inputs.into_iter();

    let before = MemorySnapshot::capture();
    let start = Instant::now();
    for input in inputs {
        black_box(f(black_box(input)));
    }
    let elapsed = start.elapsed();
    let after = MemorySnapshot::capture();

    let result = BenchmarkResult {
        label: label.to_string(),
        time_ms: round_to(elapsed.as_secs_f64() * 1000.0, TIME_PRECISION),
        rss_mb: delta_mb(before.rss, after.rss),
        heap_total_mb: delta_mb(before.virtual_memory, after.virtual_memory),
        heap_used_mb: delta_mb(before.heap_used, after.heap_used),
        external_mb: delta_mb(before.heap_large, after.heap_large),
    };

    tracing::debug!(
        label = %result.label,
        time_ms = result.time_ms,
        rss_mb = result.rss_mb,
        heap_used_mb = result.heap_used_mb,
        "Variant measured"
    );

    result
}
