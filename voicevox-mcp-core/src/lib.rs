pub mod engine;
pub mod error;
pub mod mcp;
pub mod playback;
pub mod settings;
pub mod tools;

pub use engine::{SpeechEngine, VoicevoxEngine};
pub use error::ToolError;
pub use mcp::VoicevoxMcpServer;
pub use settings::Settings;
pub use tools::VoiceTools;
