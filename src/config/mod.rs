//! Configuration: typed settings plus the Figment resolution chain.

mod loader;
mod types;

pub use loader::{ConfigLoader, CONFIG_FILE};
pub use types::{LlmSettings, Settings, TranscriptSettings};
