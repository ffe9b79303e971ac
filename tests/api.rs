//! Router-level tests for the HTML pages and the JSON API

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use algobench::{
    AppState,
    config::{BenchmarkConfig, Config},
    handlers,
};

fn app() -> Router {
    handlers::app(AppState::new(Config {
        benchmark: BenchmarkConfig {
            reverse_test_count: 50,
            substring_test_count: 20,
            fair_pairs_random_count: 5,
            fair_pairs_large_count: 0,
            include_source: true,
        },
        ..Config::default()
    }))
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_reports_version() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["problems"], 3);
}

#[tokio::test]
async fn lists_registered_benchmarks() {
    let (status, body) = get("/api/v1/benchmarks").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["total"], 3);
    let ids: Vec<&str> = json["problems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["substring", "reverse", "fairPairs"]);
}

#[tokio::test]
async fn runs_benchmark_as_json() {
    let (status, body) = get("/api/v1/benchmarks/reverse").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["problem_id"], "reverse");
    assert_eq!(json["test_count"], 50);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    assert_eq!(json["results"][0]["label"], "String-based");
    assert_eq!(json["source_code"][1]["label"], "Math-based");
    assert!(json["comparison"]["time_pct"].is_number());
}

#[tokio::test]
async fn unknown_benchmark_is_a_client_error() {
    let (status, body) = get("/api/v1/benchmarks/sorting").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "UNKNOWN_PROBLEM");
    assert_eq!(json["error"]["message"], "Unknown problem: sorting");
}

#[tokio::test]
async fn index_page_links_problems() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/benchmark/substring""#));
    assert!(body.contains(r#"href="/benchmark/fairPairs""#));
}

#[tokio::test]
async fn results_page_renders_table_and_sources() {
    let (status, body) = get("/benchmark/substring").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Longest Substring Benchmark"));
    assert!(body.contains("Map sliding window"));
    assert!(body.contains("pub fn longest_substring_map"));
}

#[tokio::test]
async fn unknown_results_page_is_404() {
    let (status, body) = get("/benchmark/sorting").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Unknown function: <code>sorting</code>"));
}

#[tokio::test]
async fn unmatched_path_uses_fallback() {
    let (status, body) = get("/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}
