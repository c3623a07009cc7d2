//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::constants::generation;
use crate::llm::provider::{GenerationConfig, Provider};
use crate::types::Result;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// LLM provider settings
    pub llm: LlmSettings,

    /// Transcript handling settings
    pub transcript: TranscriptSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            transcript: TranscriptSettings::default(),
        }
    }
}

impl Settings {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        self.llm.to_generation_config().validate()
    }
}

/// LLM backend selection and generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Provider to dispatch to
    pub provider: Provider,
    /// Model name; each backend applies its own default when absent
    pub model: Option<String>,
    /// Explicit API key; the provider env var takes precedence when set
    pub api_key: Option<String>,
    /// Sampling temperature in [0, 1]
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API base URL override
    pub api_base: Option<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            model: None,
            api_key: None,
            temperature: generation::DEFAULT_TEMPERATURE,
            max_tokens: generation::DEFAULT_MAX_TOKENS,
            timeout_secs: generation::DEFAULT_TIMEOUT_SECS,
            api_base: None,
        }
    }
}

impl LlmSettings {
    /// The immutable per-pipeline configuration these settings describe.
    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            provider: self.provider,
            model: self.model.clone().filter(|m| !m.trim().is_empty()),
            api_key: self.api_key.clone().filter(|k| !k.trim().is_empty()),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout_secs,
            api_base: self.api_base.clone(),
        }
    }
}

/// Preferences for the externally supplied transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Preferred transcript languages, in priority order
    pub languages: Vec<String>,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: vec![
                "pt".to_string(),
                "pt-BR".to_string(),
                "en".to_string(),
                "en-US".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_blank_model_treated_as_absent() {
        let settings = LlmSettings {
            model: Some("   ".to_string()),
            ..LlmSettings::default()
        };
        assert_eq!(settings.to_generation_config().model, None);
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let settings = Settings {
            llm: LlmSettings {
                temperature: 2.0,
                ..LlmSettings::default()
            },
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
