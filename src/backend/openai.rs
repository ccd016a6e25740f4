//! OpenAI-style chat-completions client
//!
//! Non-streaming JSON request against `{base_url}/v1/chat/completions`.
//! A slow call is mapped to a timeout error rather than hanging the
//! pipeline; the caller decides what to do with the failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::{BackendResponse, GenerationBackend, TokenUsage};
use crate::errors::{PolicyError, Result};
use crate::prompt::GenerationRequest;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default request timeout (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-style generation backend
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl OpenAiBackend {
    /// Create a backend with the default endpoint and model, reading the
    /// API key from the environment
    pub fn new() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            PolicyError::ConfigError(format!("{API_KEY_ENV} environment variable is not set"))
        })?;
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key, DEFAULT_TIMEOUT)
    }

    /// Create a backend with explicit configuration
    pub fn with_config(
        base_url: &str,
        model: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PolicyError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            timeout,
        })
    }

    /// Model tag this backend dispatches to
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize, Default)]
struct ApiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[async_trait]
impl GenerationBackend for OpenAiBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<BackendResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_instruction,
                },
            ],
            temperature: request.sampling.temperature,
            max_tokens: request.sampling.max_output_tokens,
            top_p: request.sampling.top_p,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PolicyError::Timeout {
                        duration_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    PolicyError::BackendError(format!("Failed to send request: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PolicyError::BackendError(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PolicyError::BackendError(format!("Malformed response: {e}")))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| PolicyError::BackendError("Response contained no choices".to_string()))?;

        let usage = completion.usage.unwrap_or_default();

        Ok(BackendResponse {
            text,
            token_usage: TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}
