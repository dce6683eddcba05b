//! Error types for the cve-correlator crate.
//!
//! A needle that cannot be confirmed present in a haystack is *not* an
//! error: the matcher reports it through [`crate::matcher::Distance::NoMatch`],
//! which propagates through ranking and composition as an ordinary value.

/// Correlator-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum CorrelatorError {
    /// A single search query against the cve-search service failed.
    #[error("cve-search query failed for needle {needle:?}: {reason}")]
    Query { needle: String, reason: String },

    /// The vendor or product vocabulary could not be fetched.
    #[error("vocabulary fetch failed: {0}")]
    Vocabulary(String),

    /// A response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport failure while talking to the cve-search host.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience result type for correlator operations.
pub type CorrelatorResult<T> = Result<T, CorrelatorError>;
