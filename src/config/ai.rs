//! Chat assistant provider selection and key material.
//!
//! The assistant can ride one hosted generation provider, chosen by
//! `BOUTIQA__AI__PROVIDER`. A selected provider without an API key is
//! not a configuration error: the gateway runs rule-based instead, so
//! the storefront keeps answering when no key is provisioned.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Which generation provider to use, plus the keys on hand.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AiConfig {
    /// Active generation provider
    #[serde(default)]
    pub provider: AiProvider,

    /// Cohere API key
    pub cohere_api_key: Option<Secret<String>>,

    /// Together API key
    pub together_api_key: Option<Secret<String>>,

    /// Groq API key
    pub groq_api_key: Option<Secret<String>>,
}

/// The generation backends the chat gateway knows how to drive.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AiProvider {
    Cohere,
    Together,
    Groq,
    #[default]
    RuleBased,
}

impl AiProvider {
    /// Wire label, as reported by the chat health endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Cohere => "cohere",
            AiProvider::Together => "together",
            AiProvider::Groq => "groq",
            AiProvider::RuleBased => "rule_based",
        }
    }
}

impl AiConfig {
    pub fn has_cohere(&self) -> bool {
        has_key(&self.cohere_api_key)
    }

    pub fn has_together(&self) -> bool {
        has_key(&self.together_api_key)
    }

    pub fn has_groq(&self) -> bool {
        has_key(&self.groq_api_key)
    }

    /// API key for the selected provider, when present and non-empty.
    pub fn selected_key(&self) -> Option<&Secret<String>> {
        let key = match self.provider {
            AiProvider::Cohere => &self.cohere_api_key,
            AiProvider::Together => &self.together_api_key,
            AiProvider::Groq => &self.groq_api_key,
            AiProvider::RuleBased => &None,
        };
        key.as_ref().filter(|k| !k.expose_secret().is_empty())
    }

    /// Providers usable with the current key material, rule-based last.
    pub fn available_providers(&self) -> Vec<&'static str> {
        let mut providers = Vec::new();
        if self.has_cohere() {
            providers.push(AiProvider::Cohere.as_str());
        }
        if self.has_together() {
            providers.push(AiProvider::Together.as_str());
        }
        if self.has_groq() {
            providers.push(AiProvider::Groq.as_str());
        }
        providers.push(AiProvider::RuleBased.as_str());
        providers
    }
}

fn has_key(key: &Option<Secret<String>>) -> bool {
    key.as_ref().is_some_and(|k| !k.expose_secret().is_empty())
}
