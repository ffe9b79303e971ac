//! Heap deltas with the tracking allocator installed
//!
//! Kept to a single test: the allocator counters are process-wide, so a
//! second test running alongside would show up in the deltas.

use algobench::benchmark::{TrackingAllocator, suites::fair_pairs_suite};
use algobench::config::BenchmarkConfig;
use algobench::constants::LARGE_ARRAY_LEN;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[test]
fn fair_pairs_deltas_exclude_the_input_batch() {
    let config = BenchmarkConfig {
        reverse_test_count: 0,
        substring_test_count: 0,
        fair_pairs_random_count: 0,
        fair_pairs_large_count: 10,
        include_source: false,
    };

    let summary = fair_pairs_suite(&config).unwrap();
    assert_eq!(summary.results.len(), 2);

    // one variant's copy of the batch, in MB
    let batch_mb = (10 * LARGE_ARRAY_LEN * size_of::<i64>()) as f64 / (1024.0 * 1024.0);
    assert!(batch_mb > 0.5);

    for result in &summary.results {
        assert!(
            result.heap_used_mb.abs() < batch_mb / 4.0,
            "{} reported {} MB against a {:.2} MB batch",
            result.label,
            result.heap_used_mb,
            batch_mb
        );
    }
}
