//! Core shared types: the unified error system and video data shapes.

pub mod error;
pub mod video;

pub use error::{Result, TubeError};
pub use video::{extract_video_id, VideoMetadata};
