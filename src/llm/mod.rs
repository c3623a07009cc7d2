//! LLM Integration Layer
//!
//! Provider abstraction, prompt templates, the generation pipeline and the
//! chat context builder.

pub mod context;
pub mod pipeline;
pub mod prompts;
pub mod provider;

pub use context::{build_context, ChatRole, ChatTurn, ConversationLog};
pub use pipeline::{GenerationPipeline, GenerationResult, GenerationTask, VideoAnalysis};
pub use prompts::{
    ArticleLength, ARTICLE_PROMPT_TEMPLATE, DEFAULT_ARTICLE_PROMPT_TEMPLATE,
    SUMMARY_PROMPT_TEMPLATE, TOPICS_PROMPT_TEMPLATE,
};
pub use provider::{
    create_backend, resolve_api_key, validate_config, GenerationConfig, GroqBackend,
    HuggingFaceBackend, LlmBackend, OllamaBackend, OpenAiBackend, Provider, SharedBackend,
    ValidationResult,
};
