//! HTTP-level tests for the analysis endpoints.
//!
//! Drives the axum router directly through tower, with the fact-check
//! provider stubbed out, so these cover validation, the response envelope
//! and the legacy direct shape without any network.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use veritas_common::{RatingResult, VeritasError};
use veritasd::analysis::TextAnalysisService;
use veritasd::providers::FactCheckProvider;
use veritasd::server::{app, AppState};

struct StubProvider {
    rating: RatingResult,
}

#[async_trait]
impl FactCheckProvider for StubProvider {
    async fn verify_claim(&self, _query: &str) -> Result<RatingResult, VeritasError> {
        Ok(self.rating.clone())
    }
    fn name(&self) -> &str {
        "stub"
    }
}

fn test_app(rating: RatingResult) -> axum::Router {
    let provider = Arc::new(StubProvider { rating });
    let state = Arc::new(AppState::new(TextAnalysisService::new(provider)));
    app(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn primary_endpoint_wraps_result_in_envelope() {
    let app = test_app(RatingResult {
        rating: 0.0,
        sources: vec!["reviewer.example".to_string()],
    });

    let response = app
        .oneshot(post_json(
            "/v1/analysis",
            serde_json::json!({ "content": "a secret miracle cure they hide" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    // Binary heuristic 0.7 averaged with rating 0.0.
    assert_eq!(json["data"]["confidence"], 0.35);
    assert_eq!(json["data"]["isFake"], true);
    assert_eq!(json["data"]["contentType"], "text");
    assert_eq!(json["data"]["sources"][0], "reviewer.example");
}

#[tokio::test]
async fn primary_endpoint_rejects_short_content() {
    let app = test_app(RatingResult::neutral());

    let response = app
        .oneshot(post_json(
            "/v1/analysis",
            serde_json::json!({ "content": "too short" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("at least 10 characters"));
}

#[tokio::test]
async fn primary_endpoint_rejects_non_text_content() {
    let app = test_app(RatingResult::neutral());

    let response = app
        .oneshot(post_json(
            "/v1/analysis",
            serde_json::json!({ "content": "an image caption long enough", "contentType": "image" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn direct_endpoint_returns_bare_result() {
    let app = test_app(RatingResult {
        rating: 0.8,
        sources: vec![],
    });

    let response = app
        .oneshot(post_json(
            "/v1/analyze-text",
            serde_json::json!({ "content": "ordinary market report" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // Bare shape, no envelope.
    assert!(json.get("success").is_none());
    assert_eq!(json["isFake"], false);
    // 0.3 heuristic averaged with 0.8 rating.
    assert_eq!(json["confidence"], 0.55);
}

#[tokio::test]
async fn direct_endpoint_requires_content() {
    let app = test_app(RatingResult::neutral());

    let response = app
        .oneshot(post_json("/v1/analyze-text", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Content is required");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app(RatingResult::neutral());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}
