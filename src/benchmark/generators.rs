//! Test data generators
//!
//! Every call draws fresh values from the thread RNG. Only the shape and
//! count of a batch are stable across runs, never the values.

use std::collections::HashSet;

use rand::Rng;

use crate::constants::{
    ALPHANUMERIC, LARGE_ARRAY_LEN, LARGE_ARRAY_LOWER, LARGE_ARRAY_PATTERN, LARGE_ARRAY_UPPER,
    PAIRS_MAX_LEN, PAIRS_MIN_LEN, PAIRS_SPAN_MAX, PAIRS_VALUE_MAX, PAIRS_VALUE_MIN, STRING_MAX_LEN,
    STRING_MIN_LEN,
};
use crate::error::{AppError, AppResult};

/// Number of distinct values representable by `i32`
const I32_DOMAIN: u64 = 1 << 32;

/// One fair-pairs input: an array and inclusive sum bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FairPairCase {
    pub nums: Vec<i64>,
    pub lower: i64,
    pub upper: i64,
}

/// `count` distinct integers drawn uniformly from the whole `i32` range,
/// in the order they were first drawn.
pub fn unique_integers(count: usize) -> AppResult<Vec<i32>> {
    if count as u64 > I32_DOMAIN {
        return Err(AppError::GenerationExhausted {
            requested: count,
            available: I32_DOMAIN,
        });
    }

    let mut rng = rand::rng();
    let mut seen = HashSet::with_capacity(count);
    let mut values = Vec::with_capacity(count);

    while values.len() < count {
        let candidate: i32 = rng.random();
        if seen.insert(candidate) {
            values.push(candidate);
        }
    }

    Ok(values)
}

/// `count` alphanumeric strings, each 10 to 300 characters long.
pub fn random_strings(count: usize) -> Vec<String> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let len = rng.random_range(STRING_MIN_LEN..=STRING_MAX_LEN);
            (0..len)
                .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
                .collect()
        })
        .collect()
}

/// `count` small fair-pairs cases with random arrays and a random window.
pub fn random_pair_cases(count: usize) -> Vec<FairPairCase> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let len = rng.random_range(PAIRS_MIN_LEN..=PAIRS_MAX_LEN);
            let nums = (0..len)
                .map(|_| rng.random_range(PAIRS_VALUE_MIN..PAIRS_VALUE_MAX))
                .collect();
            let lower = rng.random_range(PAIRS_VALUE_MIN..PAIRS_VALUE_MAX);
            let upper = lower + rng.random_range(0..PAIRS_SPAN_MAX);
            FairPairCase { nums, lower, upper }
        })
        .collect()
}

/// `count` identical large cases that tile a fixed pattern and admit every pair.
pub fn large_pair_cases(count: usize) -> Vec<FairPairCase> {
    let nums: Vec<i64> = LARGE_ARRAY_PATTERN
        .iter()
        .copied()
        .cycle()
        .take(LARGE_ARRAY_LEN)
        .collect();

    (0..count)
        .map(|_| FairPairCase {
            nums: nums.clone(),
            lower: LARGE_ARRAY_LOWER,
            upper: LARGE_ARRAY_UPPER,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_integers() {
        let values = unique_integers(5_000).unwrap();
        assert_eq!(values.len(), 5_000);

        let distinct: HashSet<i32> = values.iter().copied().collect();
        assert_eq!(distinct.len(), values.len());
    }

    #[test]
    fn test_unique_integers_zero() {
        assert!(unique_integers(0).unwrap().is_empty());
    }

    #[test]
    fn test_unique_integers_beyond_domain() {
        let err = unique_integers(usize::MAX).unwrap_err();
        assert!(matches!(err, AppError::GenerationExhausted { .. }));
    }

    #[test]
    fn test_random_strings_shape() {
        let strings = random_strings(500);
        assert_eq!(strings.len(), 500);

        for s in &strings {
            assert!((STRING_MIN_LEN..=STRING_MAX_LEN).contains(&s.len()));
            assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_pair_cases_shape() {
        let cases = random_pair_cases(200);
        assert_eq!(cases.len(), 200);

        for case in &cases {
            assert!((PAIRS_MIN_LEN..=PAIRS_MAX_LEN).contains(&case.nums.len()));
            assert!(
                case.nums
                    .iter()
                    .all(|v| (PAIRS_VALUE_MIN..PAIRS_VALUE_MAX).contains(v))
            );
            assert!((PAIRS_VALUE_MIN..PAIRS_VALUE_MAX).contains(&case.lower));
            assert!(case.upper >= case.lower);
            assert!(case.upper - case.lower < PAIRS_SPAN_MAX);
        }
    }

    #[test]
    fn test_large_pair_cases_shape() {
        let cases = large_pair_cases(2);
        assert_eq!(cases.len(), 2);

        let case = &cases[0];
        assert_eq!(case.nums.len(), LARGE_ARRAY_LEN);
        assert_eq!(&case.nums[..9], &LARGE_ARRAY_PATTERN);
        assert_eq!(&case.nums[9..18], &LARGE_ARRAY_PATTERN);
        assert_eq!(case.lower, LARGE_ARRAY_LOWER);
        assert_eq!(case.upper, LARGE_ARRAY_UPPER);
    }
}
