//! Error taxonomy for Veritas.
//!
//! Three classes of failure with different recovery contracts:
//! - `Validation`: rejected before any network call, surfaced to the caller.
//! - `Provider`: a fact-check provider call failed; recovered locally by
//!   substituting a neutral rating, never shown to the end user.
//! - `ServiceUnavailable`: a whole analysis tier is unreachable; drives the
//!   client fallback chain forward and is always recovered internally.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VeritasError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },

    #[error("Service tier '{tier}' unavailable: {message}")]
    ServiceUnavailable { tier: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VeritasError {
    /// Build a provider failure from any displayable cause.
    pub fn provider(provider: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.to_string(),
        }
    }

    /// Build a tier-unavailable failure from any displayable cause.
    pub fn unavailable(tier: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::ServiceUnavailable {
            tier: tier.into(),
            message: message.to_string(),
        }
    }

    /// True for failures the caller should report back immediately rather
    /// than recover from (currently only pre-flight validation).
    pub fn is_user_facing(&self) -> bool {
        matches!(self, VeritasError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_user_facing() {
        let err = VeritasError::Validation("content required".to_string());
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Validation error: content required");
    }

    #[test]
    fn provider_is_recovered_internally() {
        let err = VeritasError::provider("claimreview", "401 unauthorized");
        assert!(!err.is_user_facing());
        assert_eq!(
            err.to_string(),
            "Provider 'claimreview' failed: 401 unauthorized"
        );
    }
}
