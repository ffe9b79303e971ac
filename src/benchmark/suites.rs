//! Problem suites
//!
//! Each suite generates one batch, measures every variant against it in a
//! fixed order and packages the results into a [`BenchmarkSummary`].

use chrono::Utc;
use uuid::Uuid;

use crate::algorithms::{
    self, count_fair_pairs_nested, count_fair_pairs_optimized, longest_substring_array,
    longest_substring_map, reverse_math, reverse_string,
};
use crate::config::BenchmarkConfig;
use crate::constants::{LARGE_ARRAY_LEN, problems};
use crate::error::AppResult;
use crate::models::{BenchmarkResult, BenchmarkSummary, SourceCode};

use super::generators::{
    FairPairCase, large_pair_cases, random_pair_cases, random_strings, unique_integers,
};
use super::measure::measure;
use super::source::{SourceFile, extract_function_code};

pub const REVERSE_STRING_LABEL: &str = "String-based";
pub const REVERSE_MATH_LABEL: &str = "Math-based";
pub const SUBSTRING_ARRAY_LABEL: &str = "Array window + splice";
pub const SUBSTRING_MAP_LABEL: &str = "Map sliding window";
pub const PAIRS_OPTIMIZED_LABEL: &str = "Optimized O(n log n)";
pub const PAIRS_NESTED_LABEL: &str = "Nested O(n^2)";

const REVERSE_FILE: SourceFile = SourceFile::new("reverse.rs", algorithms::REVERSE_SOURCE);
const SUBSTRING_FILE: SourceFile = SourceFile::new("substring.rs", algorithms::SUBSTRING_SOURCE);
const FAIR_PAIRS_FILE: SourceFile =
    SourceFile::new("fair_pairs.rs", algorithms::FAIR_PAIRS_SOURCE);

/// Metadata describing one problem's summary header
struct SuiteInfo {
    id: &'static str,
    banner_text: &'static str,
    title: &'static str,
}

/// Label and function name of one variant, for source lookup
type VariantSource = (&'static str, &'static str);

/// Reverse-integer suite over unique random `i32` values
pub fn reverse_suite(config: &BenchmarkConfig) -> AppResult<BenchmarkSummary> {
    let inputs = unique_integers(config.reverse_test_count)?;
    tracing::info!(problem = problems::REVERSE, count = inputs.len(), "Batch generated");

    let results = vec![
        measure(REVERSE_STRING_LABEL, |x: &i32| reverse_string(*x), &inputs),
        measure(REVERSE_MATH_LABEL, |x: &i32| reverse_math(*x), &inputs),
    ];

    Ok(package(
        SuiteInfo {
            id: problems::REVERSE,
            banner_text: "REVERSE",
            title: "Reverse Integer Benchmark",
        },
        inputs.len(),
        "unique integers".to_string(),
        results,
        config.include_source.then_some((
            &REVERSE_FILE,
            &[
                (REVERSE_STRING_LABEL, "reverse_string"),
                (REVERSE_MATH_LABEL, "reverse_math"),
            ][..],
        )),
    ))
}

/// Longest-substring suite over random alphanumeric strings
pub fn substring_suite(config: &BenchmarkConfig) -> AppResult<BenchmarkSummary> {
    let inputs = random_strings(config.substring_test_count);
    tracing::info!(problem = problems::SUBSTRING, count = inputs.len(), "Batch generated");

    let results = vec![
        measure(
            SUBSTRING_ARRAY_LABEL,
            |s: &String| longest_substring_array(s),
            &inputs,
        ),
        measure(
            SUBSTRING_MAP_LABEL,
            |s: &String| longest_substring_map(s),
            &inputs,
        ),
    ];

    Ok(package(
        SuiteInfo {
            id: problems::SUBSTRING,
            banner_text: "SUBSTRING",
            title: "Longest Substring Benchmark",
        },
        inputs.len(),
        "random strings (length 10-300)".to_string(),
        results,
        config.include_source.then_some((
            &SUBSTRING_FILE,
            &[
                (SUBSTRING_ARRAY_LABEL, "longest_substring_array"),
                (SUBSTRING_MAP_LABEL, "longest_substring_map"),
            ][..],
        )),
    ))
}

/// Fair-pairs suite over random cases followed by large adversarial ones
///
/// The optimized variant sorts in place, so each variant gets its own copy of
/// the batch. Copies are made before timing starts and outlive the measured
/// window, so neither their allocation nor their release shows up in a delta.
pub fn fair_pairs_suite(config: &BenchmarkConfig) -> AppResult<BenchmarkSummary> {
    let mut inputs = random_pair_cases(config.fair_pairs_random_count);
    inputs.extend(large_pair_cases(config.fair_pairs_large_count));
    tracing::info!(problem = problems::FAIR_PAIRS, count = inputs.len(), "Batch generated");

    let mut optimized_inputs = inputs.clone();
    let nested_inputs = inputs.clone();

    let results = vec![
        measure(
            PAIRS_OPTIMIZED_LABEL,
            |case: &mut FairPairCase| {
                count_fair_pairs_optimized(&mut case.nums, case.lower, case.upper)
            },
            &mut optimized_inputs,
        ),
        measure(
            PAIRS_NESTED_LABEL,
            |case: &FairPairCase| count_fair_pairs_nested(&case.nums, case.lower, case.upper),
            &nested_inputs,
        ),
    ];

    Ok(package(
        SuiteInfo {
            id: problems::FAIR_PAIRS,
            banner_text: "FAIR PAIRS",
            title: "Count Fair Pairs Benchmark",
        },
        inputs.len(),
        format!(
            "{} random + {} large ({} elems) tests",
            config.fair_pairs_random_count, config.fair_pairs_large_count, LARGE_ARRAY_LEN
        ),
        results,
        config.include_source.then_some((
            &FAIR_PAIRS_FILE,
            &[
                (PAIRS_OPTIMIZED_LABEL, "count_fair_pairs_optimized"),
                (PAIRS_NESTED_LABEL, "count_fair_pairs_nested"),
            ][..],
        )),
    ))
}

fn package(
    info: SuiteInfo,
    test_count: usize,
    data_description: String,
    results: Vec<BenchmarkResult>,
    sources: Option<(&SourceFile, &[VariantSource])>,
) -> BenchmarkSummary {
    let (source_code, source_warnings) = match sources {
        Some((file, variants)) => collect_sources(file, variants),
        None => (None, Vec::new()),
    };

    let run_id = Uuid::new_v4();

    tracing::info!(
        run_id = %run_id,
        problem = info.id,
        variants = results.len(),
        annotated = source_code.is_some(),
        "Benchmark complete"
    );

    BenchmarkSummary {
        run_id,
        problem_id: info.id.to_string(),
        banner_text: info.banner_text.to_string(),
        title: info.title.to_string(),
        test_count,
        data_description,
        results,
        source_code,
        source_warnings,
        generated_at: Utc::now(),
    }
}

/// Look up every variant's source. Any miss drops all snippets so labels stay
/// paired one-to-one with results; the misses come back as warnings.
fn collect_sources(
    file: &SourceFile,
    variants: &[VariantSource],
) -> (Option<Vec<SourceCode>>, Vec<String>) {
    let mut sources = Vec::with_capacity(variants.len());
    let mut warnings = Vec::new();

    for (label, fn_name) in variants {
        match extract_function_code(file, fn_name) {
            Ok(code) => sources.push(SourceCode {
                label: label.to_string(),
                code,
            }),
            Err(e) => {
                tracing::warn!(label = %label, "Source annotation skipped: {}", e);
                warnings.push(e.to_string());
            }
        }
    }

    if warnings.is_empty() {
        (Some(sources), warnings)
    } else {
        (None, warnings)
    }
}
