//! News keyword-search provider.
//!
//! Simplified variant of the fact-check capability: it only checks that the
//! claim surfaces in a news search and reports a fixed placeholder rating
//! of 0.7 with no citations. Interchangeable with the claim-review
//! provider at every call site.

use super::FactCheckProvider;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use veritas_common::{RatingResult, VeritasError};

const NEWS_SEARCH_URL: &str = "https://newsdata.io/api/1/news";
const PROVIDER_NAME: &str = "newssearch";
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder rating reported for any claim the search accepts.
const PLACEHOLDER_RATING: f64 = 0.7;

pub struct NewsSearchProvider {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl NewsSearchProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(CALL_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: NEWS_SEARCH_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl FactCheckProvider for NewsSearchProvider {
    async fn verify_claim(&self, query: &str) -> Result<RatingResult, VeritasError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| VeritasError::provider(PROVIDER_NAME, "API key missing"))?;

        debug!("News search for {} chars of content", query.len());

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", api_key), ("q", query)])
            .send()
            .await
            .map_err(|e| VeritasError::provider(PROVIDER_NAME, e))?;

        if !response.status().is_success() {
            return Err(VeritasError::provider(
                PROVIDER_NAME,
                format!("HTTP {}", response.status()),
            ));
        }

        // Body is intentionally ignored: reachability of the search is the
        // whole signal this provider carries.
        Ok(RatingResult {
            rating: PLACEHOLDER_RATING,
            sources: Vec::new(),
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}
