//! Groq API Provider
//!
//! Backend adapter for Groq's OpenAI-compatible Chat Completions API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{GenerationConfig, LlmBackend, Provider};
use crate::types::{Result, TubeError};

const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq backend. Wire format follows the OpenAI chat schema.
pub struct GroqBackend {
    api_key: SecretString,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl std::fmt::Debug for GroqBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqBackend")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl GroqBackend {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let api_key = config
            .resolved_api_key()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TubeError::MissingCredential(Provider::Groq))?;

        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TubeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base,
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }
}

#[async_trait]
impl LlmBackend for GroqBackend {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        info!(
            "Generating with Groq (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let request = GroqChatRequest {
            model: self.model.clone(),
            messages: vec![GroqMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        };
        let url = format!("{}/chat/completions", self.api_base);

        debug!("Sending request to Groq API");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TubeError::Generation(format!("Groq request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TubeError::Generation(format!(
                "Groq API error ({}): {}",
                status, body
            )));
        }

        let response_body: GroqChatResponse = response
            .json()
            .await
            .map_err(|e| TubeError::Generation(format!("Failed to parse Groq response: {}", e)))?;

        let content = response_body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| TubeError::Generation("No content in Groq response".to_string()))?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct GroqChatRequest {
    model: String,
    messages: Vec<GroqMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqChatResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = GenerationConfig {
            provider: Provider::Groq,
            api_key: Some("gsk_test".to_string()),
            ..GenerationConfig::default()
        };
        let backend = GroqBackend::new(config).expect("backend");
        assert_eq!(backend.model(), DEFAULT_MODEL);
        assert_eq!(backend.api_base, DEFAULT_API_BASE);
    }
}
