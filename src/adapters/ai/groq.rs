//! Groq generation adapter.
//!
//! Speaks the OpenAI-style chat completions endpoint with a Llama 3
//! model. The system message pins the assistant to Arabic storefront
//! replies. One request per chat turn, bounded by a 10 second client
//! timeout.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GenerationError, GenerationProvider};

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama3-8b-8192";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Standing instruction sent as the system message on every call.
const SYSTEM_PROMPT: &str = "أنت مساعد ذكي لمتجر ملابس. اجعل ردودك منظمة ومفيدة باللغة العربية. استخدم الرموز التعبيرية والتنسيق الجميل.";

/// [`GenerationProvider`] backed by Groq's chat completions API.
pub struct GroqProvider {
    api_key: Secret<String>,
    client: Client,
}

impl GroqProvider {
    pub fn new(api_key: Secret<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[derive(Serialize)]
struct GroqRequest<'a> {
    messages: Vec<GroqMessage<'a>>,
    model: &'static str,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Serialize)]
struct GroqMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqChoiceMessage,
}

#[derive(Deserialize)]
struct GroqChoiceMessage {
    content: String,
}

#[async_trait]
impl GenerationProvider for GroqProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let key = self.api_key.expose_secret();
        if key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let body = GroqRequest {
            messages: vec![
                GroqMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                GroqMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            model: MODEL,
            temperature: 0.7,
            max_tokens: 300,
            top_p: 1.0,
            stream: false,
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

        let parsed: GroqResponse = response.json().await.map_err(GenerationError::parse)?;
        let text = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| GenerationError::parse("no choices in response"))?;

        if text.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
