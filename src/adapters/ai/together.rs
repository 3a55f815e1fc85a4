//! Together AI generation adapter.
//!
//! Calls the legacy `inference` endpoint with a hosted Llama 2 chat
//! model. One request per chat turn, bounded by a 15 second client
//! timeout.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GenerationError, GenerationProvider};

const API_URL: &str = "https://api.together.xyz/inference";
const MODEL: &str = "togethercomputer/llama-2-7b-chat";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// [`GenerationProvider`] backed by Together's inference API.
pub struct TogetherProvider {
    api_key: Secret<String>,
    client: Client,
}

impl TogetherProvider {
    pub fn new(api_key: Secret<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[derive(Serialize)]
struct TogetherRequest<'a> {
    model: &'static str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repetition_penalty: f32,
    stop: &'static [&'static str],
}

#[derive(Deserialize)]
struct TogetherResponse {
    output: TogetherOutput,
}

#[derive(Deserialize)]
struct TogetherOutput {
    choices: Vec<TogetherChoice>,
}

#[derive(Deserialize)]
struct TogetherChoice {
    text: String,
}

#[async_trait]
impl GenerationProvider for TogetherProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let key = self.api_key.expose_secret();
        if key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let body = TogetherRequest {
            model: MODEL,
            prompt,
            max_tokens: 200,
            temperature: 0.7,
            top_p: 0.7,
            top_k: 50,
            repetition_penalty: 1.0,
            stop: &["</s>"],
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

        let parsed: TogetherResponse = response.json().await.map_err(GenerationError::parse)?;
        let text = parsed
            .output
            .choices
            .first()
            .map(|choice| choice.text.trim().to_string())
            .ok_or_else(|| GenerationError::parse("no choices in response"))?;

        if text.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "together"
    }
}
