//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors
    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    // Benchmark errors
    #[error("Cannot generate {requested} unique values from a domain of {available}")]
    GenerationExhausted { requested: usize, available: u64 },

    #[error("Benchmark failed: {0}")]
    BenchmarkFailed(String),

    // Environment errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownProblem(_) => "UNKNOWN_PROBLEM",
            Self::GenerationExhausted { .. } => "GENERATION_EXHAUSTED",
            Self::BenchmarkFailed(_) => "BENCHMARK_FAILED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownProblem(_) => StatusCode::NOT_FOUND,
            Self::GenerationExhausted { .. }
            | Self::BenchmarkFailed(_)
            | Self::Configuration(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the caller, rather than the system, is at fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Message safe to show to clients
    pub fn public_message(&self) -> String {
        match self {
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message: self.public_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            let payload = err.into_panic();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "variant panicked".to_string());
            AppError::BenchmarkFailed(message)
        } else {
            AppError::BenchmarkFailed("benchmark task was cancelled".to_string())
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
