//! Fact-check providers.
//!
//! Both providers implement the same `FactCheckProvider` capability and are
//! selected by configuration. The claim-review provider maps textual
//! ratings from published claim reviews to scores; the news-search provider
//! is a simplified variant that always succeeds with a placeholder rating.
//!
//! Contract for callers: a provider failure is a `VeritasError::Provider`
//! and MUST be recovered by substituting `RatingResult::neutral()`, never by
//! aborting the analysis.

mod claim_review;
mod news_search;

pub use claim_review::ClaimReviewProvider;
pub use news_search::NewsSearchProvider;

use async_trait::async_trait;
use std::sync::Arc;
use veritas_common::config::ProviderKind;
use veritas_common::{RatingResult, VeritasConfig, VeritasError};

/// A claim-verification backend. Implementations normalize whatever the
/// remote API returns into a `RatingResult` in [0,1].
#[async_trait]
pub trait FactCheckProvider: Send + Sync {
    /// Verify a claim. May suspend on network I/O.
    async fn verify_claim(&self, query: &str) -> Result<RatingResult, VeritasError>;

    /// Short provider name used in explanations and logs.
    fn name(&self) -> &str;
}

/// Build the configured provider. The API key is captured at construction;
/// a missing key makes calls fail with a `Provider` error rather than
/// preventing startup.
pub fn from_config(config: &VeritasConfig) -> Arc<dyn FactCheckProvider> {
    match config.provider {
        ProviderKind::ClaimReview => {
            Arc::new(ClaimReviewProvider::new(config.factcheck_api_key.clone()))
        }
        ProviderKind::NewsSearch => {
            Arc::new(NewsSearchProvider::new(config.newsdata_api_key.clone()))
        }
    }
}
