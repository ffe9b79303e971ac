//! Winner/loser selection across a summary's results

use serde::Serialize;

use crate::constants::MEMORY_PRECISION;
use crate::models::BenchmarkResult;
use crate::utils::round_to;

/// Extremes of one summary plus relative differences
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub fastest: BenchmarkResult,
    pub slowest: BenchmarkResult,
    pub least_memory: BenchmarkResult,
    pub most_memory: BenchmarkResult,
    /// How much faster the fastest is, as a percent of the slowest time
    pub time_pct: f64,
    /// How much less heap the leanest uses, as a percent of the heaviest
    pub memory_pct: f64,
}

impl Comparison {
    /// Compare results by time and by heap usage. Ties keep the earlier result.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_results(results: &[BenchmarkResult]) -> Option<Self> {
        let first = results.first()?;

        let mut fastest = first;
        let mut slowest = first;
        let mut least_memory = first;
        let mut most_memory = first;

        for r in &results[1..] {
            if r.time_ms < fastest.time_ms {
                fastest = r;
            }
            if r.time_ms > slowest.time_ms {
                slowest = r;
            }
            if r.heap_used_mb < least_memory.heap_used_mb {
                least_memory = r;
            }
            if r.heap_used_mb > most_memory.heap_used_mb {
                most_memory = r;
            }
        }

        Some(Self {
            time_pct: percent_gap(fastest.time_ms, slowest.time_ms),
            memory_pct: percent_gap(least_memory.heap_used_mb, most_memory.heap_used_mb),
            fastest: fastest.clone(),
            slowest: slowest.clone(),
            least_memory: least_memory.clone(),
            most_memory: most_memory.clone(),
        })
    }

    pub fn is_fastest(&self, label: &str) -> bool {
        self.fastest.label == label && self.fastest.label != self.slowest.label
    }

    pub fn is_slowest(&self, label: &str) -> bool {
        self.slowest.label == label && self.fastest.label != self.slowest.label
    }

    pub fn is_least_memory(&self, label: &str) -> bool {
        self.least_memory.label == label && self.least_memory.label != self.most_memory.label
    }

    pub fn is_most_memory(&self, label: &str) -> bool {
        self.most_memory.label == label && self.least_memory.label != self.most_memory.label
    }
}

fn percent_gap(low: f64, high: f64) -> f64 {
    if high == 0.0 {
        return 0.0;
    }
    round_to((high - low) / high * 100.0, MEMORY_PRECISION)
}
