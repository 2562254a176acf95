//! Text analysis pipeline: heuristic, then fact-check, then aggregation.
//!
//! The heuristic always runs and cannot fail. The provider call may fail;
//! that failure is logged and substituted with the neutral rating so one
//! flaky upstream never aborts an analysis. A fresh `AnalysisResult` is
//! produced per request, so concurrent requests need no coordination.

use crate::aggregator::{aggregate, RatingOutcome};
use crate::providers::FactCheckProvider;
use std::sync::Arc;
use tracing::{info, warn};
use veritas_common::heuristic::{score_text, KeywordPolicy};
use veritas_common::{AnalysisResult, RatingResult};

pub struct TextAnalysisService {
    provider: Arc<dyn FactCheckProvider>,
    /// Collapse duplicate citations before returning (off by default).
    dedup_sources: bool,
}

impl TextAnalysisService {
    pub fn new(provider: Arc<dyn FactCheckProvider>) -> Self {
        Self {
            provider,
            dedup_sources: false,
        }
    }

    pub fn with_dedup_sources(mut self, dedup: bool) -> Self {
        self.dedup_sources = dedup;
        self
    }

    /// Analyze one piece of content. Infallible past validation: provider
    /// failures degrade to the neutral rating.
    pub async fn analyze(&self, content: &str) -> AnalysisResult {
        let verdict = score_text(content, KeywordPolicy::Binary);
        info!(
            "Heuristic verdict: {} suspicious terms, confidence {:.2}",
            verdict.matches, verdict.confidence
        );

        let outcome = match self.provider.verify_claim(content).await {
            Ok(rating) => {
                info!(
                    "Provider {} rated claim {:.2} with {} sources",
                    self.provider.name(),
                    rating.rating,
                    rating.sources.len()
                );
                classify_rating(rating)
            }
            Err(e) => {
                warn!("Fact-check call failed, substituting neutral rating: {}", e);
                RatingOutcome::Failed {
                    provider: self.provider.name().to_string(),
                }
            }
        };

        let result = aggregate(&verdict, &outcome).normalized();
        if self.dedup_sources {
            result.dedup_sources()
        } else {
            result
        }
    }
}

/// The provider's neutral default (0.5 with no citations) means no claim
/// review was found; anything else is a real rating. "Half True" reviews
/// still carry publisher sources, so they do not collapse into NoClaims.
fn classify_rating(rating: RatingResult) -> RatingOutcome {
    if rating.rating == 0.5 && rating.sources.is_empty() {
        RatingOutcome::NoClaims
    } else {
        RatingOutcome::Rated(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FactCheckProvider;
    use approx::assert_relative_eq;
    use async_trait::async_trait;
    use veritas_common::VeritasError;

    struct FixedProvider(RatingResult);

    #[async_trait]
    impl FactCheckProvider for FixedProvider {
        async fn verify_claim(&self, _query: &str) -> Result<RatingResult, VeritasError> {
            Ok(self.0.clone())
        }
        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl FactCheckProvider for FailingProvider {
        async fn verify_claim(&self, _query: &str) -> Result<RatingResult, VeritasError> {
            Err(VeritasError::provider("failing", "connection refused"))
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn averages_heuristic_and_rating() {
        let service = TextAnalysisService::new(Arc::new(FixedProvider(RatingResult {
            rating: 0.0,
            sources: vec!["reviewer.example".to_string()],
        })));
        // Binary heuristic: suspicious -> 0.7; (0.7 + 0.0) / 2 = 0.35.
        let result = service.analyze("secret miracle cure exposed").await;
        assert_relative_eq!(result.confidence, 0.35);
        assert!(result.is_fake);
        assert_eq!(result.sources, vec!["reviewer.example"]);
    }

    #[tokio::test]
    async fn provider_failure_substitutes_neutral() {
        let service = TextAnalysisService::new(Arc::new(FailingProvider));
        // Clean text: 0.3 heuristic, neutral 0.5 rating -> 0.4.
        let result = service.analyze("quarterly report published today").await;
        assert_relative_eq!(result.confidence, 0.4);
        assert!(result.is_fake);
        assert!(result
            .explanation
            .contains("Could not verify claim via failing API."));
    }

    #[tokio::test]
    async fn neutral_default_reads_as_no_claims() {
        let service = TextAnalysisService::new(Arc::new(FixedProvider(RatingResult::neutral())));
        let result = service.analyze("quarterly report published today").await;
        assert!(result.explanation.contains("No published fact-check found"));
    }

    #[tokio::test]
    async fn dedup_is_opt_in() {
        let dup = RatingResult {
            rating: 0.8,
            sources: vec!["a.example".to_string(), "a.example".to_string()],
        };
        let plain = TextAnalysisService::new(Arc::new(FixedProvider(dup.clone())));
        let deduped =
            TextAnalysisService::new(Arc::new(FixedProvider(dup))).with_dedup_sources(true);

        assert_eq!(plain.analyze("some text").await.sources.len(), 2);
        assert_eq!(deduped.analyze("some text").await.sources.len(), 1);
    }
}
