//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (TubeError) for the entire application
//! - Configuration problems are detected before any network attempt
//! - No panic/unwrap - all errors are recoverable by the caller
//!
//! The generation pipeline is the catch boundary: adapters and configuration
//! propagate `TubeError` with `?`, and pipeline operations convert every
//! failure into a [`GenerationResult`](crate::llm::pipeline::GenerationResult)
//! envelope so nothing crosses an operation boundary as a fault.

use thiserror::Error;

use crate::llm::provider::Provider;

#[derive(Debug, Error)]
pub enum TubeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    /// Provider name outside the recognized set.
    #[error("Provedor de LLM não suportado: {0}")]
    UnsupportedProvider(String),

    /// Hosted provider requested with neither an environment nor a supplied key.
    #[error("Falta API Key para o provedor {0}")]
    MissingCredential(Provider),

    /// Backend construction or settings failed for a non-credential reason.
    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Generation Errors
    // -------------------------------------------------------------------------
    /// The backend call itself raised or returned an error.
    #[error("{0}")]
    Generation(String),

    /// Article generation rejects a blank transcript before any backend call.
    #[error("Transcript vazio")]
    EmptyTranscript,
}

impl TubeError {
    /// Create a generation error wrapping an underlying cause.
    pub fn generation(cause: impl std::fmt::Display) -> Self {
        Self::Generation(cause.to_string())
    }

    /// True when the error was detected before any network attempt.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedProvider(_) | Self::MissingCredential(_) | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_provider() {
        let err = TubeError::MissingCredential(Provider::Groq);
        assert_eq!(err.to_string(), "Falta API Key para o provedor groq");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unsupported_provider_message() {
        let err = TubeError::UnsupportedProvider("cohere".to_string());
        assert!(err.to_string().contains("cohere"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_generation_is_not_configuration() {
        assert!(!TubeError::generation("boom").is_configuration());
        assert!(!TubeError::EmptyTranscript.is_configuration());
    }
}
