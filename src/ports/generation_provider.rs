//! Generation provider port - Interface for hosted LLM integrations.
//!
//! The chat gateway speaks to exactly one configured provider through
//! this trait and treats every error as a reason to fall back to the
//! rule-based composer. Implementations exist for Cohere, Together,
//! and Groq, plus a mock for tests.

use async_trait::async_trait;
use thiserror::Error;

/// Port for a single text-generation provider.
///
/// Implementations send the prepared Arabic prompt and return the raw
/// generated text, trimmed. They never fall back themselves; degradation
/// is the gateway's job.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate a reply for the prompt.
    ///
    /// # Errors
    ///
    /// - `MissingApiKey` when the provider has no credential configured
    /// - `Timeout` when the bounded request deadline passes
    /// - `Request` / `Parse` for transport and payload failures
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Short provider label for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Failures a generation provider can report.
///
/// None of these ever reach a storefront caller; the gateway logs them
/// and composes the deterministic reply instead.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// No API key configured for the selected provider.
    #[error("api key not configured")]
    MissingApiKey,

    /// The HTTP request failed (connect, TLS, non-success status).
    #[error("request failed: {0}")]
    Request(String),

    /// The response arrived but did not carry usable text.
    #[error("unusable response: {0}")]
    Parse(String),

    /// The provider produced an empty generation.
    #[error("empty generation")]
    Empty,

    /// The bounded per-provider deadline passed.
    #[error("timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl GenerationError {
    /// Creates a request error from any displayable cause.
    pub fn request(cause: impl std::fmt::Display) -> Self {
        GenerationError::Request(cause.to_string())
    }

    /// Creates a parse error from any displayable cause.
    pub fn parse(cause: impl std::fmt::Display) -> Self {
        GenerationError::Parse(cause.to_string())
    }

    /// True when retrying later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GenerationError::Request(_) | GenerationError::Timeout { .. }
        )
    }
}
