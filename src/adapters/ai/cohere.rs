//! Cohere generation adapter.
//!
//! Calls the `generate` endpoint with the `command-light` model. One
//! request per chat turn, bounded by a 10 second client timeout.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GenerationError, GenerationProvider};

const API_URL: &str = "https://api.cohere.ai/v1/generate";
const MODEL: &str = "command-light";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`GenerationProvider`] backed by Cohere's hosted generate API.
pub struct CohereProvider {
    api_key: Secret<String>,
    client: Client,
}

impl CohereProvider {
    pub fn new(api_key: Secret<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[derive(Serialize)]
struct CohereRequest<'a> {
    model: &'static str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    k: u32,
    stop_sequences: &'static [&'static str],
    return_likelihoods: &'static str,
}

#[derive(Deserialize)]
struct CohereResponse {
    generations: Vec<CohereGeneration>,
}

#[derive(Deserialize)]
struct CohereGeneration {
    text: String,
}

#[async_trait]
impl GenerationProvider for CohereProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let key = self.api_key.expose_secret();
        if key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let body = CohereRequest {
            model: MODEL,
            prompt,
            max_tokens: 200,
            temperature: 0.7,
            k: 0,
            stop_sequences: &[],
            return_likelihoods: "NONE",
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: REQUEST_TIMEOUT.as_secs(),
                    }
                } else if e.is_connect() {
                    GenerationError::request(format!("connection failed: {e}"))
                } else {
                    GenerationError::request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GenerationError::request(format!(
                "status {status}: {error_body}"
            )));
        }

        let parsed: CohereResponse = response.json().await.map_err(GenerationError::parse)?;
        let text = parsed
            .generations
            .first()
            .map(|generation| generation.text.trim().to_string())
            .ok_or_else(|| GenerationError::parse("no generations in response"))?;

        if text.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "cohere"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_key_short_circuits_without_a_request() {
        let provider = CohereProvider::new(Secret::new("   ".to_string()));

        let result = provider.generate("prompt").await;

        assert!(matches!(result, Err(GenerationError::MissingApiKey)));
    }

    #[test]
    fn response_shape_matches_the_generate_endpoint() {
        let parsed: CohereResponse =
            serde_json::from_str(r#"{"generations":[{"text":" مرحبا بك \n"}]}"#).unwrap();

        assert_eq!(parsed.generations[0].text.trim(), "مرحبا بك");
    }

    #[test]
    fn provider_label() {
        let provider = CohereProvider::new(Secret::new("key".to_string()));
        assert_eq!(provider.name(), "cohere");
    }
}
