//! Score aggregation: merges the keyword-heuristic verdict with the
//! fact-check rating into one `AnalysisResult`.
//!
//! The combined confidence is the plain average of the two scores and the
//! verdict is `final < 0.5` (strictly below; 0.5 itself is not fake).
//! Explanations compose append-only, heuristic clause first, and sources
//! concatenate heuristic-then-rating without deduplication.

use veritas_common::heuristic::HeuristicVerdict;
use veritas_common::{AnalysisResult, RatingResult};

/// What came back from the fact-check stage. Callers translate a provider
/// failure into `Failed` rather than letting it abort the analysis; a
/// neutral response with no claims is distinct from a failure and produces
/// a different explanation clause.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingOutcome {
    Rated(RatingResult),
    /// Provider responded but had no published review for the claim.
    NoClaims,
    /// Provider call itself failed; `provider` names it for the message.
    Failed { provider: String },
}

impl RatingOutcome {
    fn rating(&self) -> f64 {
        match self {
            RatingOutcome::Rated(r) => r.rating,
            RatingOutcome::NoClaims | RatingOutcome::Failed { .. } => 0.5,
        }
    }

    fn sources(&self) -> &[String] {
        match self {
            RatingOutcome::Rated(r) => &r.sources,
            RatingOutcome::NoClaims | RatingOutcome::Failed { .. } => &[],
        }
    }
}

/// Merge heuristic and rating into the final verdict.
pub fn aggregate(heuristic: &HeuristicVerdict, outcome: &RatingOutcome) -> AnalysisResult {
    let rating = outcome.rating();
    let final_confidence = ((heuristic.confidence + rating) / 2.0).clamp(0.0, 1.0);

    let mut explanation = heuristic.explanation.clone();
    match outcome {
        RatingOutcome::Rated(_) => {
            if rating < 0.5 {
                explanation.push_str("\nFact-check rating suggests low credibility.");
            } else {
                explanation.push_str("\nFact-check rating supports credibility.");
            }
        }
        RatingOutcome::NoClaims => {
            explanation.push_str(
                "\nNo published fact-check found for this claim; \
                 cannot determine truth from claim reviews.",
            );
        }
        RatingOutcome::Failed { provider } => {
            explanation.push_str(&format!(
                "\nCould not verify claim via {} API.",
                provider
            ));
        }
    }

    // Heuristic sources first (the heuristic carries none), then rating
    // sources, order preserved.
    let sources = outcome.sources().to_vec();

    AnalysisResult {
        is_fake: final_confidence < 0.5,
        confidence: final_confidence,
        explanation,
        sources,
    }
}
