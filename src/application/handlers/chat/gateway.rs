//! Reply gateway: one generation attempt, then the composer.
//!
//! The gateway holds at most one configured provider. A single generate
//! call is made per turn; any failure, timeout, or blank output falls
//! back to the deterministic composer with the same intent and content,
//! so the caller always gets the reply the composer would have written.
//! There is no retry and no second provider.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::chat::{build_prompt, compose_reply, Intent, RetrievedContent};
use crate::ports::GenerationProvider;

/// Source label reported when the composer wrote the reply.
pub const RULE_BASED_SOURCE: &str = "rule_based";

/// Single-attempt generation gateway with a deterministic fallback.
pub struct ReplyGateway {
    provider: Option<Arc<dyn GenerationProvider>>,
}

impl ReplyGateway {
    pub fn new(provider: Option<Arc<dyn GenerationProvider>>) -> Self {
        Self { provider }
    }

    /// Gateway with no upstream provider; every reply is composed.
    pub fn rule_based() -> Self {
        Self { provider: None }
    }

    /// Label of the active reply source, for the health endpoint.
    pub fn provider_label(&self) -> &'static str {
        self.provider
            .as_ref()
            .map(|p| p.name())
            .unwrap_or(RULE_BASED_SOURCE)
    }

    /// Produces the reply text and the label of whichever source wrote
    /// it.
    pub async fn reply(
        &self,
        intent: Intent,
        content: &RetrievedContent,
        context: &str,
        message: &str,
    ) -> (String, &'static str) {
        if let Some(provider) = &self.provider {
            let prompt = build_prompt(context, content.products(), message);
            match provider.generate(&prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(provider = provider.name(), "generated reply");
                    return (text.trim().to_string(), provider.name());
                }
                Ok(_) => {
                    warn!(provider = provider.name(), "blank generation, composing instead");
                }
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        %error,
                        "generation failed, composing instead"
                    );
                }
            }
        }

        (compose_reply(intent, content), RULE_BASED_SOURCE)
    }
}
