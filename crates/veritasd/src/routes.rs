//! API routes for veritasd.
//!
//! Two analysis surfaces with different wire shapes:
//! - `/v1/analysis` is the primary composite endpoint with the
//!   `{ success, data }` envelope.
//! - `/v1/analyze-text` is the secondary direct endpoint kept in the legacy
//!   bare-result shape; clients normalize it on their side.

use crate::server::AppState;
use crate::validation::validate_request;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use veritas_common::{AnalysisResult, AnalyzeRequest, ApiResponse, ContentType};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Primary analysis route
// ============================================================================

/// `data` payload of the primary endpoint: the verdict plus the validated
/// content type, echoed back for the extension UI.
#[derive(Debug, Serialize)]
pub struct AnalysisData {
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
}

pub fn analysis_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/analysis", post(analyze_content))
        .route("/v1/analyze-text", post(analyze_text_direct))
}

async fn analyze_content(
    State(state): State<AppStateArc>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalysisData>>, (StatusCode, Json<ApiResponse<AnalysisData>>)> {
    let content = validate_request(&req).map_err(|e| {
        info!("Rejected analysis request: {}", e);
        (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.to_string())))
    })?;

    info!("Analyzing {} chars of {:?} content", content.len(), req.content_type);

    let result = state.analysis.analyze(content).await;

    Ok(Json(ApiResponse::ok(AnalysisData {
        result,
        content_type: req.content_type,
    })))
}

// ============================================================================
// Secondary (direct) analysis route
// ============================================================================

#[derive(Debug, Deserialize)]
struct DirectRequest {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Serialize)]
struct DirectError {
    error: String,
}

async fn analyze_text_direct(
    State(state): State<AppStateArc>,
    Json(req): Json<DirectRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<DirectError>)> {
    if req.content.trim().is_empty() {
        error!("Direct analysis request missing content");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(DirectError {
                error: "Content is required".to_string(),
            }),
        ));
    }

    let result = state.analysis.analyze(req.content.trim()).await;
    Ok(Json(result))
}

// ============================================================================
// Health route
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_secs: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
