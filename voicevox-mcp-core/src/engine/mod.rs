//! VOICEVOX engine access: HTTP client, catalog types, and startup management

pub mod client;
pub mod launcher;
pub mod lifecycle;
pub mod provider;
pub mod types;

pub use client::VoicevoxEngine;
pub use launcher::{ComposeLauncher, EngineLauncher};
pub use lifecycle::{ensure_running, EngineStartup, StartupPolicy};
pub use provider::SpeechEngine;
pub use types::{AudioQuery, Speaker, SpeakerStyle, VoiceOptions, VoiceParameters};
