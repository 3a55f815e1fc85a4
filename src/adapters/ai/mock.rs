//! Mock generation provider for tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::ports::{GenerationError, GenerationProvider};

/// Scripted [`GenerationProvider`] that records every prompt it sees.
///
/// Either answers every call with one fixed string or fails every call
/// with a request error.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct MockProvider {
    reply: Option<String>,
    prompts: RwLock<Vec<String>>,
}

impl MockProvider {
    /// Creates a provider that returns `reply` verbatim for every
    /// prompt. The reply is not trimmed, so a blank string stays blank.
    pub fn answering(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Creates a provider that fails every call.
    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: RwLock::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Returns the prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .read()
            .expect("MockProvider: lock poisoned")
            .clone()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .write()
            .expect("MockProvider: lock poisoned")
            .push(prompt.to_string());

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(GenerationError::request("mock provider is set to fail")),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answering_mock_replays_its_script_and_records_prompts() {
        let provider = MockProvider::answering("scripted reply");

        let first = provider.generate("prompt one").await.unwrap();
        let second = provider.generate("prompt two").await.unwrap();

        assert_eq!(first, "scripted reply");
        assert_eq!(second, "scripted reply");
        assert_eq!(provider.prompts(), vec!["prompt one", "prompt two"]);
    }

    #[tokio::test]
    async fn failing_mock_errors_but_still_records_the_prompt() {
        let provider = MockProvider::failing();

        let result = provider.generate("prompt").await;

        assert!(matches!(result, Err(GenerationError::Request(_))));
        assert_eq!(provider.prompts(), vec!["prompt"]);
    }
}
