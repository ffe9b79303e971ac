//! Count index pairs `(i, j)`, `i < j`, whose sum lies in `[lower, upper]`
//!
//! Sums are taken in `i128`, so any `i64` input is accepted.

/// Check every pair. O(n^2).
pub fn count_fair_pairs_nested(nums: &[i64], lower: i64, upper: i64) -> u64 {
    let mut pairs = 0;
    let n = nums.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let sum = nums[i] as i128 + nums[j] as i128;
            if sum >= lower as i128 && sum <= upper as i128 {
                pairs += 1;
            }
        }
    }

    pairs
}

/// Sort, then binary-search the qualifying range in each suffix. O(n log n).
///
/// Sorts `nums` in place; callers that reuse the slice must pass a copy.
pub fn count_fair_pairs_optimized(nums: &mut [i64], lower: i64, upper: i64) -> u64 {
    nums.sort_unstable();
    let mut count = 0;

    for i in 0..nums.len() {
        let low = lower as i128 - nums[i] as i128;
        let high = upper as i128 - nums[i] as i128;
        let suffix = &nums[i + 1..];
        let left = suffix.partition_point(|&v| (v as i128) < low);
        let right = suffix.partition_point(|&v| (v as i128) <= high);
        count += right.saturating_sub(left) as u64;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_zero_pairs() {
        let mut nums = vec![0, 0, 0, 0, 0, 0];
        assert_eq!(count_fair_pairs_nested(&nums, 0, 0), 15);
        assert_eq!(count_fair_pairs_optimized(&mut nums, 0, 0), 15);
    }

    #[test]
    fn test_known_case() {
        let nums = vec![0, 1, 7, 4, 4, 5];
        assert_eq!(count_fair_pairs_nested(&nums, 3, 6), 6);
        assert_eq!(count_fair_pairs_optimized(&mut nums.clone(), 3, 6), 6);

        let nums = vec![1, 7, 9, 2, 5];
        assert_eq!(count_fair_pairs_nested(&nums, 11, 11), 1);
        assert_eq!(count_fair_pairs_optimized(&mut nums.clone(), 11, 11), 1);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(count_fair_pairs_nested(&[], 0, 10), 0);
        assert_eq!(count_fair_pairs_optimized(&mut [], 0, 10), 0);
        assert_eq!(count_fair_pairs_nested(&[5], 0, 10), 0);
        assert_eq!(count_fair_pairs_optimized(&mut [5], 0, 10), 0);
    }

    #[test]
    fn test_optimized_sorts_in_place() {
        let mut nums = vec![3, -1, 2];
        count_fair_pairs_optimized(&mut nums, -10, 10);
        assert_eq!(nums, vec![-1, 2, 3]);
    }

    #[test]
    fn test_large_magnitudes_do_not_overflow() {
        let nums = vec![-1_000_000_000, 90, 90, -1_000_000_000];
        assert_eq!(count_fair_pairs_nested(&nums, -2_000_000_000, 2_000_000_000), 6);
        assert_eq!(
            count_fair_pairs_optimized(&mut nums.clone(), -2_000_000_000, 2_000_000_000),
            6
        );
    }

    #[test]
    fn test_extreme_values() {
        // MAX + MAX is out of range; each MAX + MIN pair sums to -1
        let nums = vec![i64::MAX, i64::MAX, i64::MIN];
        assert_eq!(count_fair_pairs_nested(&nums, i64::MIN, i64::MAX), 2);
        assert_eq!(
            count_fair_pairs_optimized(&mut nums.clone(), i64::MIN, i64::MAX),
            2
        );

        let nums = vec![i64::MIN, i64::MIN, 0];
        assert_eq!(count_fair_pairs_nested(&nums, i64::MIN, -1), 2);
        assert_eq!(count_fair_pairs_optimized(&mut nums.clone(), i64::MIN, -1), 2);
    }

    proptest! {
        #[test]
        fn prop_variants_agree(
            nums in prop::collection::vec(-1000i64..1000, 0..60),
            lower in -2000i64..2000,
            span in 0i64..2000,
        ) {
            let upper = lower + span;
            let expected = count_fair_pairs_nested(&nums, lower, upper);
            let mut copy = nums.clone();
            prop_assert_eq!(count_fair_pairs_optimized(&mut copy, lower, upper), expected);
            // the nested variant still agrees once it sees the sorted copy
            prop_assert_eq!(count_fair_pairs_nested(&copy, lower, upper), expected);
        }
    }
}
