//! HuggingFace Inference API Provider
//!
//! Backend adapter for the hosted Inference API. Responses arrive as an
//! array of `{generated_text}` objects rather than the chat-completion
//! shape, so normalization differs from the chat backends.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{GenerationConfig, LlmBackend, Provider};
use crate::types::{Result, TubeError};

const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.1";

/// HuggingFace hosted Inference API backend.
pub struct HuggingFaceBackend {
    api_key: SecretString,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl std::fmt::Debug for HuggingFaceBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceBackend")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl HuggingFaceBackend {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let api_key = config
            .resolved_api_key()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TubeError::MissingCredential(Provider::HuggingFace))?;

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
impl LlmBackend for HuggingFaceBackend {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        info!(
            "Generating with HuggingFace (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let request = InferenceRequest {
            inputs: prompt.to_string(),
            parameters: InferenceParameters {
                temperature: self.temperature,
                max_new_tokens: self.max_tokens,
                return_full_text: false,
            },
        };
        let url = format!("{}/{}", self.api_base, self.model);

        debug!("Sending request to HuggingFace Inference API");

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
            .map_err(|e| TubeError::Generation(format!("HuggingFace request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TubeError::Generation(format!(
                "HuggingFace API error ({}): {}",
                status, body
            )));
        }

        let response_body: Vec<InferenceOutput> = response.json().await.map_err(|e| {
            TubeError::Generation(format!("Failed to parse HuggingFace response: {}", e))
        })?;

        let content = response_body
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| {
                TubeError::Generation("No content in HuggingFace response".to_string())
            })?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    temperature: f32,
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    generated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = GenerationConfig {
            provider: Provider::HuggingFace,
            api_key: Some("hf_test".to_string()),
            ..GenerationConfig::default()
        };
        let backend = HuggingFaceBackend::new(config).expect("backend");
        assert_eq!(backend.model(), DEFAULT_MODEL);
        assert_eq!(backend.api_base, DEFAULT_API_BASE);
    }
}
