//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! The binary loads configuration once at startup; an invalid value stops it
//! with a configuration error before anything runs.

use std::env;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_FAIR_PAIRS_LARGE_COUNT, DEFAULT_FAIR_PAIRS_RANDOM_COUNT, DEFAULT_INCLUDE_SOURCE,
    DEFAULT_LOG_FILTER, DEFAULT_REVERSE_TEST_COUNT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SUBSTRING_TEST_COUNT,
};

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub benchmark: BenchmarkConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Benchmark batch sizes and annotation settings
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Unique integers generated for the reverse problem
    pub reverse_test_count: usize,
    /// Random strings generated for the substring problem
    pub substring_test_count: usize,
    /// Small random cases generated for the fair-pairs problem
    pub fair_pairs_random_count: usize,
    /// Large adversarial cases appended to the fair-pairs batch
    pub fair_pairs_large_count: usize,
    /// Attach extracted variant source text to summaries
    pub include_source: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            benchmark: BenchmarkConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BenchmarkConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            reverse_test_count: parse_var("REVERSE_TEST_COUNT", DEFAULT_REVERSE_TEST_COUNT)?,
            substring_test_count: parse_var("SUBSTRING_TEST_COUNT", DEFAULT_SUBSTRING_TEST_COUNT)?,
            fair_pairs_random_count: parse_var(
                "FAIR_PAIRS_RANDOM_COUNT",
                DEFAULT_FAIR_PAIRS_RANDOM_COUNT,
            )?,
            fair_pairs_large_count: parse_var(
                "FAIR_PAIRS_LARGE_COUNT",
                DEFAULT_FAIR_PAIRS_LARGE_COUNT,
            )?,
            include_source: parse_var("INCLUDE_SOURCE", DEFAULT_INCLUDE_SOURCE)?,
        })
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            reverse_test_count: DEFAULT_REVERSE_TEST_COUNT,
            substring_test_count: DEFAULT_SUBSTRING_TEST_COUNT,
            fair_pairs_random_count: DEFAULT_FAIR_PAIRS_RANDOM_COUNT,
            fair_pairs_large_count: DEFAULT_FAIR_PAIRS_LARGE_COUNT,
            include_source: DEFAULT_INCLUDE_SOURCE,
        }
    }
}

/// Read `name` from the environment, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
