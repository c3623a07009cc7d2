//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (tubetalk.toml in the working directory)
//! 3. Environment variables (TUBETALK_* prefix)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use tracing::debug;

use super::types::Settings;
use crate::types::{Result, TubeError};

/// Project config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "tubetalk.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → tubetalk.toml → env vars.
    pub fn load() -> Result<Settings> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        let project_path = Path::new(CONFIG_FILE);
        if project_path.exists() {
            debug!("Loading config from: {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        // e.g. TUBETALK_LLM_PROVIDER -> llm.provider
        figment = figment.merge(Env::prefixed("TUBETALK_").split("_").lowercase(true));

        let settings: Settings = figment
            .extract()
            .map_err(|e| TubeError::Config(format!("Configuration error: {}", e)))?;

        settings.validate()?;

        Ok(settings)
    }

    /// Load configuration from a specific file only (plus defaults).
    pub fn load_from_file(path: &Path) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| TubeError::Config(format!("Configuration error: {}", e)))?;

        settings.validate()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tubetalk.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(
            file,
            "[llm]\nprovider = \"groq\"\ntemperature = 0.2\nmodel = \"llama-3.1-8b-instant\""
        )
        .expect("write");

        let settings = ConfigLoader::load_from_file(&path).expect("load");
        assert_eq!(settings.llm.provider.as_str(), "groq");
        assert_eq!(settings.llm.temperature, 0.2);
        assert_eq!(settings.llm.model.as_deref(), Some("llama-3.1-8b-instant"));
        // Untouched fields keep defaults.
        assert_eq!(
            settings.llm.max_tokens,
            crate::constants::generation::DEFAULT_MAX_TOKENS
        );
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tubetalk.toml");
        std::fs::write(&path, "[llm]\ntemperature = 3.5\n").expect("write");

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, TubeError::Config(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings =
            ConfigLoader::load_from_file(Path::new("/nonexistent/tubetalk.toml")).expect("load");
        assert_eq!(settings.llm.provider.as_str(), "openai");
    }
}
