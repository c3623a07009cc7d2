//! Global Constants
//!
//! Centralized constants for configuration and tuning.

/// Generation parameter defaults
pub mod generation {
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Default maximum tokens to generate
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;

    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
}

/// Conversation context constants
pub mod context {
    /// Transcript excerpt bound for chat prompts (characters).
    /// Fixed, not configurable: keeps the prompt size predictable.
    pub const TRANSCRIPT_EXCERPT_CHARS: usize = 800;

    /// Maximum (question, answer) turns retained in a conversation log.
    /// Oldest pairs are dropped beyond this, so long sessions cannot grow
    /// memory without bound.
    pub const MAX_LOG_TURNS: usize = 64;
}
