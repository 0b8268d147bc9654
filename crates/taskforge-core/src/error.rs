//! Error taxonomy for extraction and normalization.
//!
//! Two tiers: `NormalizeError` is per-record and always absorbed (the offending
//! field degrades to `None`); `ExtractError` is per-call and aborts the whole
//! call with a uniform failure envelope. Neither ever crosses the orchestrator
//! boundary as a raw error.

/// Result type for due-date resolution.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Per-record failure: the candidate due-date could not be resolved.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NormalizeError {
    /// The timestamp-like candidate did not parse as a calendar instant.
    #[error("invalid due-date candidate: {0}")]
    InvalidDate(String),
}

/// Per-call failure from the completion bridge or response parsing.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The completion returned JSON that violates the expected shape
    /// (non-object payload, or a transcript response missing the `tasks` array).
    #[error("completion response violates the expected shape: {0}")]
    MalformedResponse(String),

    /// Transport or API-level failure from the completion capability.
    #[error("completion request failed: {0}")]
    UpstreamFailure(String),

    /// The completion request exceeded the bridge's deadline.
    #[error("completion request timed out")]
    UpstreamTimeout,

    /// No API key configured for the completion bridge.
    #[error("no completion API key configured")]
    MissingApiKey,
}
