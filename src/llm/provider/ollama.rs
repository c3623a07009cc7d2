//! Ollama Local LLM Provider
//!
//! Backend adapter for locally-running Ollama models. No credential is
//! required; the only cost is local inference latency.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{GenerationConfig, LlmBackend};
use crate::types::{Result, TubeError};

const DEFAULT_API_BASE: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "phi3";

/// Ollama local backend.
#[derive(Debug)]
pub struct OllamaBackend {
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl OllamaBackend {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        // Validate endpoint URL for security (SSRF prevention)
        let api_base = Self::validate_endpoint(&api_base)?;

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TubeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_base,
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    /// Only http/https schemes are accepted; non-localhost hosts get a warning.
    fn validate_endpoint(endpoint: &str) -> Result<String> {
        let url = url::Url::parse(endpoint).map_err(|e| {
            TubeError::Config(format!("Invalid Ollama endpoint URL '{}': {}", endpoint, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TubeError::Config(format!(
                "Ollama endpoint must use http or https scheme, got: {}",
                url.scheme()
            )));
        }

        if let Some(host) = url.host_str() {
            if !matches!(host, "localhost" | "127.0.0.1" | "::1") {
                warn!(
                    "Ollama endpoint is not localhost: {}. Ensure this is intentional.",
                    host
                );
            }
        }

        // Remove trailing slash for consistency
        let mut result = url.to_string();
        if result.ends_with('/') {
            result.pop();
        }
        Ok(result)
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        info!(
            "Generating with Ollama (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: Some(OllamaOptions {
                temperature: self.temperature,
                num_predict: self.max_tokens,
            }),
        };
        let url = format!("{}/api/generate", self.api_base);

        debug!("Sending request to Ollama API");

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TubeError::Generation(format!(
                        "Failed to connect to Ollama at {}. Is Ollama running? Start with: ollama serve",
                        self.api_base
                    ))
                } else {
                    TubeError::Generation(format!("Ollama request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TubeError::Generation(format!(
                "Ollama API error ({}): {}",
                status, body
            )));
        }

        let response_body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| TubeError::Generation(format!("Failed to parse Ollama response: {}", e)))?;

        Ok(response_body.response.trim().to_string())
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::Provider;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::for_provider(Provider::Ollama);
        let backend = OllamaBackend::new(config).expect("Failed to create backend");
        assert_eq!(backend.api_base, DEFAULT_API_BASE);
        assert_eq!(backend.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_no_credential_required() {
        // A keyless config constructs fine; Ollama is local.
        let config = GenerationConfig {
            provider: Provider::Ollama,
            api_key: None,
            ..GenerationConfig::default()
        };
        assert!(OllamaBackend::new(config).is_ok());
    }

    #[test]
    fn test_endpoint_scheme_rejected() {
        let config = GenerationConfig {
            provider: Provider::Ollama,
            api_base: Some("file:///etc/passwd".to_string()),
            ..GenerationConfig::default()
        };
        let err = OllamaBackend::new(config).unwrap_err();
        assert!(matches!(err, TubeError::Config(_)));
    }
}
