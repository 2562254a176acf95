//! Pre-flight request validation.
//!
//! Runs before any network call. A rejected request is reported to the
//! caller immediately with a specific message and is never retried.

use veritas_common::{AnalyzeRequest, ContentType, VeritasError};

/// Minimum content length in characters, after trimming.
pub const MIN_CONTENT_LEN: usize = 10;
/// Maximum content length in characters.
pub const MAX_CONTENT_LEN: usize = 10_000;

/// Validate an analysis request, returning the trimmed content.
pub fn validate_request(request: &AnalyzeRequest) -> Result<&str, VeritasError> {
    if request.content_type != ContentType::Text {
        return Err(VeritasError::Validation(
            "Only text content is supported".to_string(),
        ));
    }

    let content = request.content.trim();
    if content.is_empty() {
        return Err(VeritasError::Validation("Content is required".to_string()));
    }

    let len = content.chars().count();
    if len < MIN_CONTENT_LEN {
        return Err(VeritasError::Validation(format!(
            "Content must be at least {} characters",
            MIN_CONTENT_LEN
        )));
    }
    if len > MAX_CONTENT_LEN {
        return Err(VeritasError::Validation(format!(
            "Content must be at most {} characters",
            MAX_CONTENT_LEN
        )));
    }

    Ok(content)
}
