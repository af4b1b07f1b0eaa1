use async_trait::async_trait;

use super::types::{Speaker, VoiceParameters};
use crate::error::ToolError;

/// Trait for text-to-speech engines reachable by the tool handlers
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Base URL, used in connection-failure messages
    fn base_url(&self) -> &str;

    /// Health probe. Never fails; anything but a 200 from the engine is `false`.
    async fn is_running(&self) -> bool;

    /// Engine version string
    async fn version(&self) -> Result<String, ToolError>;

    /// Fetch the speaker catalog
    async fn speakers(&self) -> Result<Vec<Speaker>, ToolError>;

    /// Synthesize text to WAV bytes
    async fn synthesize(&self, text: &str, params: &VoiceParameters) -> Result<Vec<u8>, ToolError>;
}
