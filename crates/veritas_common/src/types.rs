//! Wire and domain types shared by the daemon and the client.
//!
//! `AnalysisResult` is the single output type threaded through every layer.
//! It is constructed fresh per request and never mutated after return.
//! Field shapes match the JSON the browser extension consumes, so the wire
//! names stay camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder used when an upstream response carried no explanation.
pub const NO_EXPLANATION: &str = "No explanation provided";

/// Content kinds accepted by the analysis endpoint. Only text is
/// implemented; image and audio are rejected at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Audio,
}

/// Request body for the primary analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    #[serde(rename = "contentType", default = "default_content_type")]
    pub content_type: ContentType,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

fn default_content_type() -> ContentType {
    ContentType::Text
}

impl AnalyzeRequest {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::Text,
            session_id: None,
        }
    }
}

/// Final verdict for one piece of content.
///
/// `confidence` is the strength of belief that the content is fake, in
/// [0,1]. `sources` preserves observed order and is not deduplicated
/// (display-side dedup is an explicit, optional step).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "isFake")]
    pub is_fake: bool,
    pub confidence: f64,
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl AnalysisResult {
    /// Boundary normalization: applied once where an external response
    /// enters the system. Clamps confidence into [0,1] (NaN collapses to
    /// the neutral 0.5) and fills a missing explanation.
    pub fn normalized(mut self) -> Self {
        if self.confidence.is_nan() {
            self.confidence = 0.5;
        }
        self.confidence = self.confidence.clamp(0.0, 1.0);
        if self.explanation.trim().is_empty() {
            self.explanation = NO_EXPLANATION.to_string();
        }
        self
    }

    /// Optional display-side deduplication, preserving first occurrence
    /// order. Off by default; see `VeritasConfig::dedup_sources`.
    pub fn dedup_sources(mut self) -> Self {
        let mut seen = std::collections::HashSet::new();
        self.sources.retain(|s| seen.insert(s.clone()));
        self
    }
}

/// Intermediate result from a fact-check provider.
///
/// `rating` is credibility in [0,1]; 0.5 means "unknown/neutral" and is the
/// substitute value whenever the provider fails or finds no claim review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub rating: f64,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl RatingResult {
    /// The neutral default callers substitute on provider failure.
    pub fn neutral() -> Self {
        Self {
            rating: 0.5,
            sources: Vec::new(),
        }
    }
}

/// Response envelope for the primary endpoint: `{ success, data }` on 2xx,
/// `{ success: false, error }` with a non-2xx status otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// One detection history entry, newest first on disk readback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Schema version for backward compatibility
    pub schema_version: u8,
    /// Timestamp (UTC, RFC3339)
    pub timestamp: DateTime<Utc>,
    /// Analyzed content (may be truncated to a preview)
    pub content: String,
    /// The verdict as returned to the user
    pub result: AnalysisResult,
}
