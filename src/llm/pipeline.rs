//! Generation Pipeline
//!
//! Runs templated generation tasks (summary, topic extraction, article,
//! free-form chat answer) against one backend adapter and normalizes every
//! outcome into a uniform [`GenerationResult`] envelope.
//!
//! ## Invariants
//!
//! - Each operation calls the backend's `invoke` exactly once; there is no
//!   internal retry.
//! - Operations never return `Err` and never panic: failures are captured in
//!   the envelope so the caller can always render a message.
//! - The pipeline is stateless between calls apart from its backend handle,
//!   which it owns for its lifetime and never shares across requests.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::prompts::{self, ArticleLength, DEFAULT_ARTICLE_PROMPT_TEMPLATE};
use super::provider::{create_backend, GenerationConfig, SharedBackend};
use crate::types::{Result, TubeError};

// =============================================================================
// Result Envelope
// =============================================================================

/// Which operation produced a result; the envelope's payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationTask {
    Summary,
    Topics,
    Article,
    /// Free-form generation, including chat answers.
    Text,
}

impl std::fmt::Display for GenerationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => f.write_str("summary"),
            Self::Topics => f.write_str("topics"),
            Self::Article => f.write_str("article"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Uniform return shape of every generation operation.
///
/// Exactly one of `payload`/`error` is populated, matching `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub task: GenerationTask,
    pub payload: Option<String>,
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn ok(task: GenerationTask, payload: impl Into<String>) -> Self {
        Self {
            success: true,
            task,
            payload: Some(payload.into()),
            error: None,
        }
    }

    pub fn fail(task: GenerationTask, error: impl Into<String>) -> Self {
        Self {
            success: false,
            task,
            payload: None,
            error: Some(error.into()),
        }
    }

    /// Same error message under a different task key, for pass-through of an
    /// underlying failure.
    fn retagged(self, task: GenerationTask) -> Self {
        Self { task, ..self }
    }

    /// The generated text, when successful.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Convert into a `Result`, for callers that abort a multi-stage run on
    /// the first failing stage.
    pub fn into_result(self) -> Result<String> {
        if self.success {
            self.payload
                .ok_or_else(|| TubeError::Generation("empty payload in success envelope".into()))
        } else {
            Err(TubeError::Generation(
                self.error
                    .unwrap_or_else(|| "unknown generation failure".into()),
            ))
        }
    }
}

/// Output of a full sequential analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub summary: String,
    pub topics: String,
    pub article: String,
}

// =============================================================================
// Pipeline
// =============================================================================

/// One backend handle plus the templated operations that run against it.
pub struct GenerationPipeline {
    backend: SharedBackend,
}

impl std::fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("backend", &self.backend.name())
            .field("model", &self.backend.model())
            .finish()
    }
}

impl GenerationPipeline {
    /// Build the backend selected by `config` and wrap it in a pipeline.
    ///
    /// Fails fast (credential or configuration error) before any network
    /// attempt.
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        Ok(Self {
            backend: create_backend(config)?,
        })
    }

    /// Wrap an existing backend. Test seam and custom-adapter entry point.
    pub fn with_backend(backend: SharedBackend) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// Send one prompt to the backend and normalize the outcome.
    ///
    /// The single place a backend failure is converted into envelope form;
    /// every other operation passes that error through unchanged.
    pub async fn generate(&self, prompt: &str) -> GenerationResult {
        debug!(backend = self.backend.name(), "dispatching prompt");
        match self.backend.invoke(prompt).await {
            Ok(text) => GenerationResult::ok(GenerationTask::Text, text),
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "generation failed");
                GenerationResult::fail(
                    GenerationTask::Text,
                    format!("Falha ao gerar texto: {}", e),
                )
            }
        }
    }

    /// Generate a short introductory summary of the transcript.
    ///
    /// The template is rendered with the transcript as-is; an empty
    /// transcript is still sent.
    pub async fn generate_summary(&self, transcript: &str, template: &str) -> GenerationResult {
        let prompt = prompts::render(template, transcript, "");
        self.generate(&prompt)
            .await
            .retagged(GenerationTask::Summary)
    }

    /// Extract the key topics of the transcript.
    ///
    /// The bullet format the template asks for is prompt-level only; the
    /// output is returned verbatim.
    pub async fn extract_topics(&self, transcript: &str, template: &str) -> GenerationResult {
        let prompt = prompts::render(template, transcript, "");
        self.generate(&prompt)
            .await
            .retagged(GenerationTask::Topics)
    }

    /// Generate an article from the transcript.
    ///
    /// Rejects a blank transcript before any backend call. The prompt is the
    /// length hint plus the caller's template (or the built-in default),
    /// rendered with transcript and title; a supplied title additionally
    /// prefixes an instruction to title the article accordingly.
    pub async fn generate_article(
        &self,
        transcript: &str,
        title: Option<&str>,
        template: Option<&str>,
        length: ArticleLength,
    ) -> GenerationResult {
        if transcript.trim().is_empty() {
            return GenerationResult::fail(
                GenerationTask::Article,
                TubeError::EmptyTranscript.to_string(),
            );
        }

        let base = template.unwrap_or(DEFAULT_ARTICLE_PROMPT_TEMPLATE);
        let prompt = match title {
            Some(title) => format!(
                "Escreva um artigo em português pt-BR intitulado '{}'. {}\n\n{}",
                title,
                length.hint(),
                prompts::render(base, transcript, title)
            ),
            None => format!(
                "{}\n\n{}",
                length.hint(),
                prompts::render(base, transcript, "")
            ),
        };

        self.generate(&prompt)
            .await
            .retagged(GenerationTask::Article)
    }

    /// Answer a follow-up question against an assembled context string.
    ///
    /// See [`build_context`](crate::llm::context::build_context) for how the
    /// context is put together by the caller.
    pub async fn generate_chat_answer(&self, context: &str, question: &str) -> GenerationResult {
        let prompt = format!(
            "Context:\n{}\n\nUser question: {}\n\nPlease answer concisely and reference the context when applicable.",
            context, question
        );
        self.generate(&prompt).await
    }

    /// Run the three analysis stages strictly sequentially, aborting on the
    /// first failure.
    pub async fn run_analysis(
        &self,
        transcript: &str,
        title: Option<&str>,
        length: ArticleLength,
    ) -> Result<VideoAnalysis> {
        let summary = self
            .generate_summary(transcript, prompts::SUMMARY_PROMPT_TEMPLATE)
            .await
            .into_result()?;

        let topics = self
            .extract_topics(transcript, prompts::TOPICS_PROMPT_TEMPLATE)
            .await
            .into_result()?;

        let article = self
            .generate_article(
                transcript,
                title,
                Some(prompts::ARTICLE_PROMPT_TEMPLATE),
                length,
            )
            .await
            .into_result()?;

        Ok(VideoAnalysis {
            summary,
            topics,
            article,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_exactly_one_side_set() {
        let ok = GenerationResult::ok(GenerationTask::Summary, "text");
        assert!(ok.success);
        assert_eq!(ok.payload(), Some("text"));
        assert!(ok.error.is_none());

        let fail = GenerationResult::fail(GenerationTask::Article, "boom");
        assert!(!fail.success);
        assert!(fail.payload.is_none());
        assert_eq!(fail.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_into_result_round_trip() {
        assert_eq!(
            GenerationResult::ok(GenerationTask::Text, "ok")
                .into_result()
                .unwrap(),
            "ok"
        );
        let err = GenerationResult::fail(GenerationTask::Text, "bad")
            .into_result()
            .unwrap_err();
        assert!(matches!(err, TubeError::Generation(ref m) if m == "bad"));
    }

    #[test]
    fn test_task_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&GenerationTask::Summary).unwrap(),
            "\"summary\""
        );
        assert_eq!(
            serde_json::to_string(&GenerationTask::Text).unwrap(),
            "\"text\""
        );
    }
}
