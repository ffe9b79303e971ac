//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod benchmarks;
pub mod health;
pub mod pages;

use axum::{Router, middleware};

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/benchmarks", benchmarks::routes())
}

/// Full application router: HTML pages, the JSON API and the 404 fallback
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes())
        .nest("/api/v1", routes())
        .fallback(pages::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
