//! Credential resolution and pre-flight configuration validation.
//!
//! Both functions are pure lookups: no network I/O and no backend
//! construction, so the caller can surface actionable feedback before
//! attempting generation.

use std::env;

use super::Provider;

/// Resolve the credential to use for `provider`.
///
/// Ollama is local and never requires a key. For hosted providers the
/// provider-specific environment variable takes precedence over the
/// explicitly supplied key; the supplied key is used only when no
/// environment key is set. Note the precedence is env-first, not
/// explicit-overrides-implicit.
pub fn resolve_api_key(provider: Provider, provided_key: Option<&str>) -> Option<String> {
    let env_name = provider.env_key_name()?;

    match env::var(env_name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => provided_key.map(str::to_string),
    }
}

/// Outcome of a pre-flight configuration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Validate a (provider, key) pair before any backend is built.
///
/// - Unknown provider names are invalid.
/// - Ollama is always valid.
/// - Hosted providers are valid iff an environment credential exists or a
///   non-blank key was supplied.
pub fn validate_config(provider_name: &str, api_key: Option<&str>) -> ValidationResult {
    let provider: Provider = match provider_name.parse() {
        Ok(p) => p,
        Err(_) => {
            return ValidationResult::invalid(format!(
                "Provedor inválido: {}",
                provider_name
            ));
        }
    };

    let env_name = match provider.env_key_name() {
        Some(name) => name,
        None => return ValidationResult::ok(),
    };

    let has_env_key = env::var(env_name)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    let has_provided_key = api_key.map(|k| !k.trim().is_empty()).unwrap_or(false);

    if has_env_key || has_provided_key {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid(format!("Falta API Key para o provedor {}", provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests use a dedicated variable name per test to stay
    // independent of each other and of the process environment.

    #[test]
    fn test_resolve_ollama_always_absent() {
        assert_eq!(resolve_api_key(Provider::Ollama, None), None);
        assert_eq!(resolve_api_key(Provider::Ollama, Some("ignored")), None);
    }

    #[test]
    fn test_resolve_env_wins_over_provided() {
        env::set_var("OPENAI_API_KEY", "env-key");
        assert_eq!(
            resolve_api_key(Provider::OpenAi, Some("provided-key")),
            Some("env-key".to_string())
        );
        env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    fn test_resolve_falls_back_to_provided() {
        env::remove_var("GROQ_API_KEY");
        assert_eq!(
            resolve_api_key(Provider::Groq, Some("provided-key")),
            Some("provided-key".to_string())
        );
        assert_eq!(resolve_api_key(Provider::Groq, None), None);
    }

    #[test]
    fn test_validate_unknown_provider() {
        let result = validate_config("cohere", None);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("cohere"));
    }

    #[test]
    fn test_validate_ollama_unconditional() {
        let result = validate_config("ollama", None);
        assert!(result.valid);
        assert!(result.error.is_none());
    }

    // One test per environment variable: cargo runs tests in parallel and
    // the process environment is shared, so each variable is touched by
    // exactly one test function.
    #[test]
    fn test_validate_hosted_provider_credential_rules() {
        env::remove_var("HUGGINGFACEHUB_API_KEY");

        let result = validate_config("huggingface", None);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("huggingface"));

        // A blank key does not count.
        assert!(!validate_config("huggingface", Some("   ")).valid);

        // A non-blank supplied key suffices.
        assert!(validate_config("huggingface", Some("hf_abc")).valid);

        // So does an environment credential on its own.
        env::set_var("HUGGINGFACEHUB_API_KEY", "hf_env");
        assert!(validate_config("huggingface", None).valid);
        env::remove_var("HUGGINGFACEHUB_API_KEY");
    }
}
