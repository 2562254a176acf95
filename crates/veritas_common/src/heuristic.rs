//! Keyword heuristic for suspicious-language scoring.
//!
//! Pure and deterministic: lowercases the content once and counts how many
//! distinct suspicious terms occur as substrings. Two scoring policies
//! coexist on purpose for different call paths:
//! - `Binary` is what the daemon's NLP stage runs (0.7 on any match, 0.3
//!   otherwise).
//! - `Weighted` is what the client's fallback of last resort runs
//!   (0.5 + 0.07 per match, capped at 0.95).
//! They are kept as named strategies rather than merged; callers pick one.

use serde::{Deserialize, Serialize};

/// Suspicious terms matched case-insensitively as substrings.
const SUSPICIOUS_TERMS: &[&str] = &[
    "miracle",
    "secret",
    "shocking",
    "cure",
    "conspiracy",
    "wake up",
    "mainstream media won't tell you",
    "miracle cure",
    "one weird trick",
];

const MATCH_EXPLANATION: &str =
    "Contains suspicious keywords commonly found in misinformation.";
const NO_MATCH_EXPLANATION: &str = "No suspicious keywords found.";

/// Scoring strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPolicy {
    /// Any match scores 0.7, no match scores 0.3.
    Binary,
    /// min(0.5 + 0.07 * matches, 0.95); used by the local fallback tier.
    Weighted,
}

/// Output of the heuristic stage. No sources: citations only come from
/// providers or the hardcoded fallback list.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicVerdict {
    pub is_fake: bool,
    pub confidence: f64,
    pub explanation: String,
    /// Number of distinct suspicious terms matched.
    pub matches: usize,
}

/// Score `content` against the suspicious-term list under the given policy.
pub fn score_text(content: &str, policy: KeywordPolicy) -> HeuristicVerdict {
    let lowered = content.to_lowercase();
    let matches = SUSPICIOUS_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .count();

    let confidence = match policy {
        KeywordPolicy::Binary => {
            if matches > 0 {
                0.7
            } else {
                0.3
            }
        }
        KeywordPolicy::Weighted => (0.5 + 0.07 * matches as f64).min(0.95),
    };

    HeuristicVerdict {
        is_fake: matches > 0,
        confidence,
        explanation: if matches > 0 {
            MATCH_EXPLANATION.to_string()
        } else {
            NO_MATCH_EXPLANATION.to_string()
        },
        matches,
    }
}
