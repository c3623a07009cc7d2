//! TubeTalk - LLM Generation Pipeline for YouTube Video Analysis
//!
//! Takes a video transcript (supplied by an external fetch layer) and drives
//! one of several text-generation backends to produce a summary, a topic
//! list, a generated article and context-aware chat answers.
//!
//! ## Core Features
//!
//! - **Provider Abstraction**: OpenAI, Groq, HuggingFace and local Ollama
//!   behind one `invoke` contract
//! - **Pre-flight Validation**: credential and configuration checks before
//!   any network attempt
//! - **Uniform Envelopes**: every generation operation returns a
//!   success/payload/error envelope, never a fault
//! - **Bounded Chat Context**: fixed-order context assembly with a capped
//!   transcript excerpt and a ring-buffered conversation log
//!
//! ## Quick Start
//!
//! ```ignore
//! use tubetalk::llm::{GenerationConfig, GenerationPipeline, Provider};
//! use tubetalk::llm::prompts::SUMMARY_PROMPT_TEMPLATE;
//!
//! let config = GenerationConfig::for_provider(Provider::Ollama);
//! let pipeline = GenerationPipeline::from_config(&config)?;
//! let result = pipeline
//!     .generate_summary(&transcript, SUMMARY_PROMPT_TEMPLATE)
//!     .await;
//! if result.success {
//!     println!("{}", result.payload().unwrap_or_default());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`llm`]: provider adapters, prompt templates, pipeline, chat context
//! - [`config`]: Figment-based settings resolution
//! - [`types`]: unified error type and video data shapes

pub mod cli;
pub mod config;
pub mod constants;
pub mod llm;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{ConfigLoader, LlmSettings, Settings};

// Error Types
pub use types::error::{Result, TubeError};

// Video shapes
pub use types::video::{extract_video_id, VideoMetadata};

// =============================================================================
// LLM Re-exports
// =============================================================================

pub use llm::{
    build_context,
    create_backend,
    resolve_api_key,
    validate_config,
    ArticleLength,
    ConversationLog,
    GenerationConfig,
    GenerationPipeline,
    GenerationResult,
    GenerationTask,
    LlmBackend,
    Provider,
    SharedBackend,
    ValidationResult,
    VideoAnalysis,
};
