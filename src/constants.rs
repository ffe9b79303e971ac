//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Number of unique integers fed to the reverse-integer variants
pub const DEFAULT_REVERSE_TEST_COUNT: usize = 100_000;

/// Number of random strings fed to the longest-substring variants
pub const DEFAULT_SUBSTRING_TEST_COUNT: usize = 10_000;

/// Number of small random fair-pairs cases
pub const DEFAULT_FAIR_PAIRS_RANDOM_COUNT: usize = 100;

/// Number of large adversarial fair-pairs cases
pub const DEFAULT_FAIR_PAIRS_LARGE_COUNT: usize = 10;

/// Whether variant source text is attached to summaries by default
pub const DEFAULT_INCLUDE_SOURCE: bool = true;

// =============================================================================
// TEST DATA SHAPES
// =============================================================================

/// Characters used by the random string generator
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Inclusive length range of generated strings
pub const STRING_MIN_LEN: usize = 10;
pub const STRING_MAX_LEN: usize = 300;

/// Inclusive length range of small fair-pairs arrays
pub const PAIRS_MIN_LEN: usize = 1;
pub const PAIRS_MAX_LEN: usize = 100;

/// Half-open element and lower-bound range of small fair-pairs cases
pub const PAIRS_VALUE_MIN: i64 = -1000;
pub const PAIRS_VALUE_MAX: i64 = 1000;

/// Half-open range of the offset added to `lower` to form `upper`
pub const PAIRS_SPAN_MAX: i64 = 1000;

/// Length of every large adversarial array
pub const LARGE_ARRAY_LEN: usize = 10_000;

/// Repeating pattern tiled into large adversarial arrays
pub const LARGE_ARRAY_PATTERN: [i64; 9] = [
    -1_000_000_000,
    90,
    90,
    -1_000_000_000,
    90,
    -1_000_000_000,
    90,
    90,
    -1_000_000_000,
];

/// Bounds wide enough to admit every pair of the large pattern
pub const LARGE_ARRAY_LOWER: i64 = -2_000_000_000;
pub const LARGE_ARRAY_UPPER: i64 = 2_000_000_000;

// =============================================================================
// MEASUREMENT
// =============================================================================

/// Bytes per megabyte used when converting memory deltas
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Decimal places kept for elapsed time
pub const TIME_PRECISION: u32 = 4;

/// Decimal places kept for memory deltas
pub const MEMORY_PRECISION: u32 = 2;

/// Allocations at or above this size count towards `external_mb`
pub const LARGE_ALLOCATION_THRESHOLD: usize = 128 * 1024;

// =============================================================================
// PROBLEM IDENTIFIERS
// =============================================================================

/// Registered problem ids, in declared order
pub mod problems {
    pub const SUBSTRING: &str = "substring";
    pub const REVERSE: &str = "reverse";
    pub const FAIR_PAIRS: &str = "fairPairs";

    pub const ALL: &[&str] = &[SUBSTRING, REVERSE, FAIR_PAIRS];
}

// =============================================================================
// PRESENTATION
// =============================================================================

/// Width of the terminal report frame, in wave characters
pub const REPORT_WIDTH: usize = 80;

/// Signature embedded in the report's top border
pub const REPORT_SIGNATURE: &str = "AlgoBench";
