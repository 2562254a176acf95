//! Cascading fallback chain.
//!
//! Three ordered attempt tiers: PRIMARY (composite analysis service),
//! SECONDARY (direct analysis service), LOCAL_FALLBACK (weighted keyword
//! heuristic, in-process). Strict priority order, no retries, each remote
//! attempt bounded by its own timeout; worst case latency is roughly two
//! timeouts. The chain never fails: the local tier is total, so every run
//! terminates with a result and the tier that produced it.
//!
//! Remote tiers sit behind the `AnalysisTier` trait so the transition
//! logic is testable without a transport.

use async_trait::async_trait;
use std::fmt;
use tracing::{info, warn};
use veritas_common::heuristic::{score_text, KeywordPolicy};
use veritas_common::{AnalysisResult, VeritasError};

/// Citations attached to local-fallback verdicts, since no provider was
/// consulted.
pub const FALLBACK_SOURCES: [&str; 2] =
    ["https://www.factcheck.org/", "https://www.snopes.com/"];

/// Attempt tiers in strict priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Secondary,
    LocalFallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Primary => write!(f, "primary"),
            Tier::Secondary => write!(f, "secondary"),
            Tier::LocalFallback => write!(f, "local-fallback"),
        }
    }
}

/// One remote attempt stage. Implementations normalize their response at
/// the boundary and report any failure (timeout, network, non-2xx,
/// malformed body) as `ServiceUnavailable`.
#[async_trait]
pub trait AnalysisTier: Send + Sync {
    async fn attempt(&self, content: &str) -> Result<AnalysisResult, VeritasError>;
    fn tier(&self) -> Tier;
}

/// The chain's answer: the authoritative result plus which tier produced
/// it, so callers (and tests) can tell a SECONDARY answer from a local one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    pub result: AnalysisResult,
    pub tier: Tier,
}

pub struct FallbackChain {
    tiers: Vec<Box<dyn AnalysisTier>>,
}

impl FallbackChain {
    /// Build a chain from remote tiers, tried in the given order. The
    /// local heuristic tier is implicit and always last.
    pub fn new(tiers: Vec<Box<dyn AnalysisTier>>) -> Self {
        Self { tiers }
    }

    /// Run the chain to completion. Infallible: if every remote tier
    /// fails, the local heuristic answers.
    pub async fn run(&self, content: &str) -> ChainOutcome {
        for tier in &self.tiers {
            match tier.attempt(content).await {
                Ok(result) => {
                    info!("Tier {} answered", tier.tier());
                    return ChainOutcome {
                        result: result.normalized(),
                        tier: tier.tier(),
                    };
                }
                Err(e) => {
                    // Timeout, refused connection, bad status, bad body:
                    // all advance the chain the same way.
                    warn!("Tier {} failed, advancing: {}", tier.tier(), e);
                }
            }
        }

        ChainOutcome {
            result: local_fallback(content),
            tier: Tier::LocalFallback,
        }
    }
}

/// Last-resort verdict from the weighted keyword heuristic. Never fails.
pub fn local_fallback(content: &str) -> AnalysisResult {
    let verdict = score_text(content, KeywordPolicy::Weighted);

    let mut explanation = verdict.explanation;
    explanation.push_str(
        "\nAnalysis services were unreachable; this verdict comes from the \
         local keyword heuristic only.",
    );

    AnalysisResult {
        is_fake: verdict.is_fake,
        confidence: verdict.confidence,
        explanation,
        sources: FALLBACK_SOURCES.iter().map(|s| s.to_string()).collect(),
    }
    .normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubTier {
        tier: Tier,
        response: Option<AnalysisResult>,
        calls: Arc<AtomicUsize>,
    }

    impl StubTier {
        fn ok(tier: Tier, result: AnalysisResult) -> (Box<dyn AnalysisTier>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Box::new(Self {
                    tier,
                    response: Some(result),
                    calls: calls.clone(),
                }),
                calls,
            )
        }

        fn failing(tier: Tier) -> (Box<dyn AnalysisTier>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Box::new(Self {
                    tier,
                    response: None,
                    calls: calls.clone(),
                }),
                calls,
            )
        }
    }

    #[async_trait]
    impl AnalysisTier for StubTier {
        async fn attempt(&self, _content: &str) -> Result<AnalysisResult, VeritasError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Some(r) => Ok(r.clone()),
                None => Err(VeritasError::unavailable(
                    self.tier.to_string(),
                    "connection timed out",
                )),
            }
        }

        fn tier(&self) -> Tier {
            self.tier
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            is_fake: false,
            confidence: 0.42,
            explanation: "remote verdict".to_string(),
            sources: vec!["reviewer.example".to_string()],
        }
    }

    #[tokio::test]
    async fn primary_success_short_circuits() {
        let (primary, primary_calls) = StubTier::ok(Tier::Primary, sample_result());
        let (secondary, secondary_calls) = StubTier::ok(Tier::Secondary, sample_result());
        let chain = FallbackChain::new(vec![primary, secondary]);

        let outcome = chain.run("some content").await;
        assert_eq!(outcome.tier, Tier::Primary);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn primary_failure_falls_through_to_secondary() {
        let (primary, primary_calls) = StubTier::failing(Tier::Primary);
        let (secondary, _) = StubTier::ok(Tier::Secondary, sample_result());
        let chain = FallbackChain::new(vec![primary, secondary]);

        let outcome = chain.run("some content").await;
        assert_eq!(outcome.tier, Tier::Secondary);
        assert_eq!(outcome.result, sample_result());
        // No retry of the failed tier.
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn all_remote_failures_reach_local_fallback() {
        let (primary, primary_calls) = StubTier::failing(Tier::Primary);
        let (secondary, secondary_calls) = StubTier::failing(Tier::Secondary);
        let chain = FallbackChain::new(vec![primary, secondary]);

        let outcome = chain.run("shocking conspiracy revealed").await;
        assert_eq!(outcome.tier, Tier::LocalFallback);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 1);

        // Weighted policy bounds and the hardcoded citations.
        assert!(outcome.result.confidence >= 0.5 && outcome.result.confidence <= 0.95);
        assert_eq!(outcome.result.sources.len(), 2);
    }

    #[tokio::test]
    async fn local_fallback_uses_weighted_policy() {
        // Two suspicious terms: 0.5 + 0.14.
        let result = local_fallback("shocking conspiracy revealed");
        assert!(result.is_fake);
        assert!((result.confidence - 0.64).abs() < 1e-9);
        assert!(result.sources.contains(&"https://www.factcheck.org/".to_string()));
        assert!(result.sources.contains(&"https://www.snopes.com/".to_string()));
    }

    #[tokio::test]
    async fn clean_content_local_fallback_is_neutral_not_fake() {
        let result = local_fallback("ordinary municipal budget news");
        assert!(!result.is_fake);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }
}
