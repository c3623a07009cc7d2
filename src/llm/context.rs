//! Conversation Context Builder
//!
//! Assembles the bounded textual context used for chat-style follow-up
//! questions, plus the per-video conversation log the caller layer holds
//! between questions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::context::{MAX_LOG_TURNS, TRANSCRIPT_EXCERPT_CHARS};
use crate::types::VideoMetadata;

/// Build the context string for a follow-up question.
///
/// Sections appear in fixed order (Title, Description, Tags, Summary,
/// Transcript excerpt), each on its own `Label: value` line with a blank
/// line between sections. Empty or absent fields are omitted entirely, and
/// the transcript excerpt is bounded to its first 800 characters so the
/// prompt size stays predictable. Never fails.
pub fn build_context(metadata: &VideoMetadata, summary: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(title) = non_empty(metadata.title.as_deref()) {
        parts.push(format!("Title: {}", title));
    }
    if let Some(description) = non_empty(metadata.description.as_deref()) {
        parts.push(format!("Description: {}", description));
    }
    if !metadata.keywords.is_empty() {
        parts.push(format!("Tags: {}", metadata.keywords.join(", ")));
    }
    if let Some(summary) = non_empty(summary) {
        parts.push(format!("Summary: {}", summary));
    }
    if let Some(transcript) = non_empty(Some(metadata.transcript.as_str())) {
        parts.push(format!(
            "Transcript excerpt: {}",
            truncate_chars(transcript, TRANSCRIPT_EXCERPT_CHARS)
        ));
    }

    parts.join("\n\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Speaker of one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One (role, text) entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Append-only conversation log for one video.
///
/// Owned by the caller layer (session/UI), not by the pipeline; created
/// empty on the first question for a video and cleared when a different
/// video is analyzed. Bounded: beyond [`MAX_LOG_TURNS`] entries the oldest
/// question/answer pair is dropped, so long sessions cannot grow memory
/// without limit.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    video_id: Option<String>,
    turns: VecDeque<ChatTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The video this log belongs to, if any question was recorded yet.
    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    /// Record one question/answer exchange for `video_id`.
    ///
    /// Switching to a different video clears the previous conversation.
    pub fn record(&mut self, video_id: &str, question: &str, answer: &str) {
        if self.video_id.as_deref() != Some(video_id) {
            self.turns.clear();
            self.video_id = Some(video_id.to_string());
        }

        self.turns.push_back(ChatTurn {
            role: ChatRole::User,
            text: question.to_string(),
        });
        self.turns.push_back(ChatTurn {
            role: ChatRole::Assistant,
            text: answer.to_string(),
        });

        // Drop whole pairs from the front once over the cap.
        while self.turns.len() > MAX_LOG_TURNS {
            self.turns.pop_front();
            self.turns.pop_front();
        }
    }

    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Forget everything, e.g. when the user starts over.
    pub fn reset(&mut self) {
        self.video_id = None;
        self.turns.clear();
    }
}
