//! Video metadata and URL handling.
//!
//! The transcript/metadata fetch itself is an external collaborator (the UI
//! layer, or a file handed to the CLI); these are the shapes the pipeline
//! consumes.

use serde::{Deserialize, Serialize};

/// YouTube video identifiers are always 11 characters.
const VIDEO_ID_LEN: usize = 11;

/// Metadata and transcript for one video, as supplied by the fetch layer.
///
/// Every field except `transcript` is optional; the context builder simply
/// omits sections whose source field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub transcript: String,
    #[serde(default)]
    pub transcript_language: Option<String>,
}

impl VideoMetadata {
    /// Bare metadata around a transcript, for callers that only have the text.
    pub fn from_transcript(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            ..Self::default()
        }
    }
}

/// Extract the video identifier from a YouTube URL.
///
/// Recognizes the short-link shape (`youtu.be/<id>`) and the query-parameter
/// shape (`...?v=<id>`). Anything else, or an identifier that is not exactly
/// 11 characters, yields `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    let id = if let Some(rest) = url.split("youtu.be/").nth(1) {
        rest.split(['?', '&', '/']).next()?
    } else if let Some(rest) = url.split("v=").nth(1) {
        rest.split(['&', '?']).next()?
    } else {
        return None;
    };

    if id.len() == VIDEO_ID_LEN {
        Some(id.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_from_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_from_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_rejects_unrecognized_shapes() {
        assert_eq!(extract_video_id("https://example.com/video/123"), None);
        assert_eq!(extract_video_id("not a url"), None);
    }

    #[test]
    fn test_rejects_wrong_length_id() {
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=waytoolongidentifier"),
            None
        );
    }
}
