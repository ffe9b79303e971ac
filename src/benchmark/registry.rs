//! Problem registry
//!
//! Maps the fixed set of problem ids to their suites. This is the seam the
//! CLI and the HTTP handlers bind to.

use crate::config::BenchmarkConfig;
use crate::constants::problems;
use crate::error::{AppError, AppResult};
use crate::models::BenchmarkSummary;

use super::suites::{fair_pairs_suite, reverse_suite, substring_suite};

/// Suite entry point
pub type SuiteFn = fn(&BenchmarkConfig) -> AppResult<BenchmarkSummary>;

/// A registered problem
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub id: &'static str,
    run: SuiteFn,
}

impl Problem {
    /// Display name: the id with its first letter capitalised
    pub fn display_name(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Registry of runnable problems, in declared order
#[derive(Debug, Clone)]
pub struct ProblemRegistry {
    config: BenchmarkConfig,
    problems: Vec<Problem>,
}

impl ProblemRegistry {
    /// Registry with every built-in problem
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            problems: vec![
                Problem {
                    id: problems::SUBSTRING,
                    run: substring_suite,
                },
                Problem {
                    id: problems::REVERSE,
                    run: reverse_suite,
                },
                Problem {
                    id: problems::FAIR_PAIRS,
                    run: fair_pairs_suite,
                },
            ],
        }
    }

    /// Registered problems in declared order
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Registered ids in declared order
    pub fn ids(&self) -> Vec<&'static str> {
        self.problems.iter().map(|p| p.id).collect()
    }

    /// Check if an id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.problems.iter().any(|p| p.id == id)
    }

    /// Look up a problem by id
    pub fn resolve(&self, id: &str) -> AppResult<&Problem> {
        self.problems
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::UnknownProblem(id.to_string()))
    }

    /// Resolve `id` and run its suite once
    pub fn run(&self, id: &str) -> AppResult<BenchmarkSummary> {
        let problem = self.resolve(id)?;
        tracing::info!(problem = problem.id, "Running benchmark");
        (problem.run)(&self.config)
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProblemRegistry {
        ProblemRegistry::new(BenchmarkConfig {
            reverse_test_count: 5,
            substring_test_count: 5,
            fair_pairs_random_count: 5,
            fair_pairs_large_count: 0,
            include_source: false,
        })
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(registry().ids(), problems::ALL.to_vec());
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = registry()
            .problems()
            .iter()
            .map(Problem::display_name)
            .collect();
        assert_eq!(names, vec!["Substring", "Reverse", "FairPairs"]);
    }

    #[test]
    fn test_run_known_problem() {
        let summary = registry().run("reverse").unwrap();
        assert_eq!(summary.problem_id, "reverse");
        assert_eq!(summary.test_count, 5);
        assert_eq!(summary.results.len(), 2);
        assert!(summary.results.iter().all(|r| r.time_ms >= 0.0));
    }

    #[test]
    fn test_unknown_problem_is_user_error() {
        let registry = registry();
        assert!(!registry.contains("sorting"));

        let err = registry.run("sorting").unwrap_err();
        assert!(matches!(err, AppError::UnknownProblem(ref id) if id == "sorting"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        assert!(registry().resolve("FairPairs").is_err());
        assert!(registry().resolve("fairPairs").is_ok());
    }
}
