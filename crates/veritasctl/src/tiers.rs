//! HTTP implementations of the remote attempt tiers.
//!
//! Both tiers share one reqwest client carrying the per-attempt timeout, so
//! a hung service costs at most `ATTEMPT_TIMEOUT` before the chain
//! advances. Responses are normalized here, at the boundary, not in the
//! chain logic: the secondary service speaks the legacy bare-result shape
//! with optional fields, and those defaults live in this module only.

use crate::fallback::{AnalysisTier, Tier};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use veritas_common::types::NO_EXPLANATION;
use veritas_common::{AnalysisResult, AnalyzeRequest, ApiResponse, VeritasError};

/// Per-attempt budget for each remote tier.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(ATTEMPT_TIMEOUT)
        .build()
        .unwrap_or_default()
}

// ============================================================================
// Primary tier
// ============================================================================

/// POSTs the full request to the composite analysis service and unwraps
/// the `{ success, data }` envelope.
pub struct PrimaryTier {
    http_client: reqwest::Client,
    base_url: String,
}

impl PrimaryTier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: build_client(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AnalysisTier for PrimaryTier {
    async fn attempt(&self, content: &str) -> Result<AnalysisResult, VeritasError> {
        let url = format!("{}/v1/analysis", self.base_url);
        let request = AnalyzeRequest::text(content);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VeritasError::unavailable("primary", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VeritasError::unavailable(
                "primary",
                format!("HTTP {}: {}", status, body),
            ));
        }

        let envelope: ApiResponse<AnalysisResult> = response
            .json()
            .await
            .map_err(|e| VeritasError::unavailable("primary", e))?;

        match envelope.data {
            Some(result) if envelope.success => Ok(result),
            _ => Err(VeritasError::unavailable(
                "primary",
                envelope
                    .error
                    .unwrap_or_else(|| "invalid response structure".to_string()),
            )),
        }
    }

    fn tier(&self) -> Tier {
        Tier::Primary
    }
}

// ============================================================================
// Secondary tier
// ============================================================================

/// Legacy direct-service response: every field optional; defaults applied
/// once here.
#[derive(Debug, Deserialize)]
struct DirectResponse {
    #[serde(rename = "isFake", default)]
    is_fake: bool,
    confidence: Option<f64>,
    explanation: Option<String>,
    sources: Option<Vec<String>>,
}

impl DirectResponse {
    fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            is_fake: self.is_fake,
            confidence: self.confidence.unwrap_or(0.5),
            explanation: self.explanation.unwrap_or_else(|| NO_EXPLANATION.to_string()),
            sources: self.sources.unwrap_or_default(),
        }
        .normalized()
    }
}

/// POSTs `{ content }` to the direct analysis service and wraps its bare
/// response into the common result shape.
pub struct SecondaryTier {
    http_client: reqwest::Client,
    base_url: String,
}

impl SecondaryTier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: build_client(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AnalysisTier for SecondaryTier {
    async fn attempt(&self, content: &str) -> Result<AnalysisResult, VeritasError> {
        let url = format!("{}/v1/analyze-text", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await
            .map_err(|e| VeritasError::unavailable("secondary", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VeritasError::unavailable(
                "secondary",
                format!("HTTP {}", status),
            ));
        }

        let body: DirectResponse = response
            .json()
            .await
            .map_err(|e| VeritasError::unavailable("secondary", e))?;

        Ok(body.into_result())
    }

    fn tier(&self) -> Tier {
        Tier::Secondary
    }
}
