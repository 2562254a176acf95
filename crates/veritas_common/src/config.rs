//! Process-wide configuration, read once from the environment at startup
//! and immutable afterwards. Missing API keys are not fatal for the
//! process: the affected provider fails its calls and the analysis falls
//! back to the neutral rating.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which fact-check provider backs the daemon's analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Claim-review search API (textual ratings mapped to scores).
    ClaimReview,
    /// News keyword-search API (placeholder rating, always succeeds).
    NewsSearch,
}

#[derive(Debug, Clone)]
pub struct VeritasConfig {
    /// Base URL of the primary composite analysis service.
    pub primary_url: String,
    /// Base URL of the secondary direct analysis service.
    pub secondary_url: String,
    /// Port the daemon binds to.
    pub port: u16,
    /// Provider backing the daemon pipeline.
    pub provider: ProviderKind,
    /// API key for the claim-review provider, if configured.
    pub factcheck_api_key: Option<String>,
    /// API key for the news-search provider, if configured.
    pub newsdata_api_key: Option<String>,
    /// When true, duplicate source citations are collapsed before display.
    pub dedup_sources: bool,
}

impl VeritasConfig {
    pub const DEFAULT_PRIMARY_URL: &'static str = "http://127.0.0.1:9998";
    pub const DEFAULT_SECONDARY_URL: &'static str = "http://127.0.0.1:9999";
    pub const DEFAULT_PORT: u16 = 9998;

    /// Load configuration from the environment. Never fails; every field
    /// has a documented default and missing keys only produce a warning.
    pub fn from_env() -> Self {
        let provider = match std::env::var("VERITAS_PROVIDER").as_deref() {
            Ok("newssearch") => ProviderKind::NewsSearch,
            Ok("claimreview") | Err(_) => ProviderKind::ClaimReview,
            Ok(other) => {
                warn!("Unknown VERITAS_PROVIDER '{}', using claimreview", other);
                ProviderKind::ClaimReview
            }
        };

        let factcheck_api_key = std::env::var("FACTCHECK_API_KEY").ok();
        let newsdata_api_key = std::env::var("NEWSDATA_API_KEY").ok();

        match provider {
            ProviderKind::ClaimReview if factcheck_api_key.is_none() => {
                warn!("FACTCHECK_API_KEY not set; claim-review lookups will fail neutral");
            }
            ProviderKind::NewsSearch if newsdata_api_key.is_none() => {
                warn!("NEWSDATA_API_KEY not set; news-search lookups will fail neutral");
            }
            _ => {}
        }

        Self {
            primary_url: std::env::var("VERITAS_PRIMARY_URL")
                .unwrap_or_else(|_| Self::DEFAULT_PRIMARY_URL.to_string()),
            secondary_url: std::env::var("VERITAS_SECONDARY_URL")
                .unwrap_or_else(|_| Self::DEFAULT_SECONDARY_URL.to_string()),
            port: std::env::var("VERITAS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            provider,
            factcheck_api_key,
            newsdata_api_key,
            dedup_sources: std::env::var("VERITAS_DEDUP_SOURCES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for VeritasConfig {
    fn default() -> Self {
        Self {
            primary_url: Self::DEFAULT_PRIMARY_URL.to_string(),
            secondary_url: Self::DEFAULT_SECONDARY_URL.to_string(),
            port: Self::DEFAULT_PORT,
            provider: ProviderKind::ClaimReview,
            factcheck_api_key: None,
            newsdata_api_key: None,
            dedup_sources: false,
        }
    }
}
