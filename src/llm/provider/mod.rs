//! LLM Provider Abstraction
//!
//! Defines the LlmBackend trait for free-form text generation and the
//! factory that maps a [`GenerationConfig`] to a concrete backend.
//!
//! Dispatch is a closed enum: each supported backend is one variant of
//! [`Provider`] with its own adapter struct, so adding a provider is an
//! enumerable change rather than open-ended string comparison.

mod credentials;
mod groq;
mod huggingface;
mod ollama;
mod openai;

pub use credentials::{resolve_api_key, validate_config, ValidationResult};
pub use groq::GroqBackend;
pub use huggingface::HuggingFaceBackend;
pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::types::{Result, TubeError};

// =============================================================================
// Provider Identifiers
// =============================================================================

/// The recognized text-generation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Ollama,
    Groq,
    HuggingFace,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::Ollama,
        Provider::Groq,
        Provider::HuggingFace,
    ];

    /// Lowercase identifier, as used in config files and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Ollama => "ollama",
            Self::Groq => "groq",
            Self::HuggingFace => "huggingface",
        }
    }

    /// Environment variable holding this provider's credential, if it uses one.
    pub fn env_key_name(&self) -> Option<&'static str> {
        match self {
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::Groq => Some("GROQ_API_KEY"),
            Self::HuggingFace => Some("HUGGINGFACEHUB_API_KEY"),
            Self::Ollama => None,
        }
    }

    /// Local backends never require a credential.
    pub fn requires_credential(&self) -> bool {
        self.env_key_name().is_some()
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = TubeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            "groq" => Ok(Self::Groq),
            "huggingface" => Ok(Self::HuggingFace),
            other => Err(TubeError::UnsupportedProvider(other.to_string())),
        }
    }
}

// =============================================================================
// Generation Configuration
// =============================================================================

/// Configuration for one backend connection.
///
/// Immutable once a pipeline is constructed: one instance configures exactly
/// one backend handle. The API key is never serialized to output and is
/// redacted in debug output; each adapter converts it to SecretString
/// internally for runtime protection.
#[derive(Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Backend to dispatch to.
    pub provider: Provider,
    /// Model name (provider-specific); each adapter applies its own default
    /// when absent.
    pub model: Option<String>,
    /// Explicitly supplied API key. See [`resolve_api_key`] for how this
    /// interacts with environment credentials.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Sampling temperature (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// API base URL override (for custom endpoints).
    #[serde(default)]
    pub api_base: Option<String>,
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            model: None,
            api_key: None,
            temperature: crate::constants::generation::DEFAULT_TEMPERATURE,
            max_tokens: crate::constants::generation::DEFAULT_MAX_TOKENS,
            timeout_secs: crate::constants::generation::DEFAULT_TIMEOUT_SECS,
            api_base: None,
        }
    }
}

impl GenerationConfig {
    /// Minimal config for a provider, everything else defaulted.
    pub fn for_provider(provider: Provider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    /// Range-check parameter values. Does not touch credentials; use
    /// [`validate_config`] for the pre-flight credential check.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(TubeError::Config(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(TubeError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(TubeError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The credential the adapters will actually use.
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_api_key(self.provider, self.api_key.as_deref())
    }
}

// =============================================================================
// Backend Trait
// =============================================================================

/// Shared backend type; the pipeline owns one for its lifetime.
pub type SharedBackend = Arc<dyn LlmBackend + Send + Sync>;

/// One text-generation backend, normalized to a single call contract.
///
/// `invoke` sends the prompt exactly once (no retry, no streaming) and
/// returns the generated text trimmed of surrounding whitespace. Transport
/// and API failures come back as `TubeError::Generation`.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Model name currently in use.
    fn model(&self) -> &str;
}

/// Construct the backend selected by `config.provider`.
///
/// Fails fast with a credential or configuration error before any network
/// attempt; a returned handle is ready to `invoke`.
pub fn create_backend(config: &GenerationConfig) -> Result<SharedBackend> {
    config.validate()?;
    match config.provider {
        Provider::OpenAi => Ok(Arc::new(OpenAiBackend::new(config.clone())?)),
        Provider::Ollama => Ok(Arc::new(OllamaBackend::new(config.clone())?)),
        Provider::Groq => Ok(Arc::new(GroqBackend::new(config.clone())?)),
        Provider::HuggingFace => Ok(Arc::new(HuggingFaceBackend::new(config.clone())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str_case_insensitive() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("ollama".parse::<Provider>().unwrap(), Provider::Ollama);
        assert_eq!("GROQ".parse::<Provider>().unwrap(), Provider::Groq);
        assert_eq!(
            "huggingface".parse::<Provider>().unwrap(),
            Provider::HuggingFace
        );
    }

    #[test]
    fn test_provider_from_str_unknown() {
        let err = "cohere".parse::<Provider>().unwrap_err();
        assert!(matches!(err, TubeError::UnsupportedProvider(ref p) if p == "cohere"));
    }

    #[test]
    fn test_only_ollama_skips_credential() {
        for provider in Provider::ALL {
            assert_eq!(
                provider.requires_credential(),
                provider != Provider::Ollama
            );
        }
    }

    #[test]
    fn test_config_validate_rejects_out_of_range() {
        let config = GenerationConfig {
            temperature: 1.5,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GenerationConfig {
            max_tokens: 0,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());

        assert!(GenerationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GenerationConfig {
            api_key: Some("sk-secret".to_string()),
            ..GenerationConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
