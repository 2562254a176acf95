//! Claim-review provider.
//!
//! Queries a published claim-review search API and maps the first claim's
//! first review's textual rating to a score. The rating map is exact and
//! case-sensitive; anything unrecognized collapses to the neutral 0.5.

use super::FactCheckProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use veritas_common::{RatingResult, VeritasError};

const CLAIMS_SEARCH_URL: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";
const LANGUAGE_CODE: &str = "en-US";
const PROVIDER_NAME: &str = "claimreview";
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Textual rating -> credibility score. Unrecognized or missing ratings
/// map to 0.5.
pub fn convert_rating_to_score(rating: &str) -> f64 {
    match rating {
        "True" => 1.0,
        "Mostly True" => 0.8,
        "Half True" => 0.5,
        "Mostly False" => 0.3,
        "False" => 0.0,
        _ => 0.5,
    }
}

#[derive(Debug, Deserialize)]
struct ClaimsSearchResponse {
    #[serde(default)]
    claims: Vec<Claim>,
}

#[derive(Debug, Deserialize)]
struct Claim {
    #[serde(rename = "claimReview", default)]
    claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Deserialize)]
struct ClaimReview {
    #[serde(rename = "textualRating")]
    textual_rating: Option<String>,
    publisher: Option<Publisher>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    name: Option<String>,
    site: Option<String>,
}

pub struct ClaimReviewProvider {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl ClaimReviewProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(CALL_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: CLAIMS_SEARCH_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn normalize(response: ClaimsSearchResponse) -> RatingResult {
        let first_claim = response.claims.first();

        let rating = first_claim
            .and_then(|c| c.claim_review.first())
            .and_then(|r| r.textual_rating.as_deref())
            .map(convert_rating_to_score)
            .unwrap_or(0.5);

        let sources = first_claim
            .map(|c| {
                c.claim_review
                    .iter()
                    .map(|r| {
                        r.publisher
                            .as_ref()
                            .and_then(|p| p.site.clone().or_else(|| p.name.clone()))
                            .unwrap_or_else(|| "Unknown".to_string())
                    })
                    .collect()
            })
            .unwrap_or_default();

        RatingResult { rating, sources }
    }
}

#[async_trait]
impl FactCheckProvider for ClaimReviewProvider {
    async fn verify_claim(&self, query: &str) -> Result<RatingResult, VeritasError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| VeritasError::provider(PROVIDER_NAME, "API key missing"))?;

        debug!("Searching claim reviews for {} chars of content", query.len());

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("query", query),
                ("languageCode", LANGUAGE_CODE),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| VeritasError::provider(PROVIDER_NAME, e))?;

        if !response.status().is_success() {
            return Err(VeritasError::provider(
                PROVIDER_NAME,
                format!("HTTP {}", response.status()),
            ));
        }

        let body: ClaimsSearchResponse = response
            .json()
            .await
            .map_err(|e| VeritasError::provider(PROVIDER_NAME, e))?;

        Ok(Self::normalize(body))
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}
