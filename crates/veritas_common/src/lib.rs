//! Shared library for Veritas - credibility analysis for user-selected text
//!
//! Holds the types, error taxonomy, keyword heuristic and configuration
//! shared between the analysis daemon (veritasd) and the client CLI
//! (veritasctl). Nothing in here performs network I/O.

pub mod config;
pub mod error;
pub mod heuristic;
pub mod types;

pub use config::VeritasConfig;
pub use error::VeritasError;
pub use heuristic::{score_text, HeuristicVerdict, KeywordPolicy};
pub use types::{
    AnalysisResult, AnalyzeRequest, ApiResponse, ContentType, DetectionRecord, RatingResult,
};
