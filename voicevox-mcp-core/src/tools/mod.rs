//! The three tool handlers. Every handler returns text: failures are rendered
//! into the message instead of being surfaced as errors.

mod list_speakers;
pub mod params;
mod save_audio;
mod speak_text;

use std::sync::Arc;

use crate::engine::SpeechEngine;
use crate::playback::AudioPlayer;

pub use params::{SaveAudioParams, SpeakTextParams};
pub use save_audio::normalize_output_path;
pub use speak_text::preview;

#[derive(Clone)]
pub struct VoiceTools {
    engine: Arc<dyn SpeechEngine>,
    player: Arc<dyn AudioPlayer>,
    default_speaker: u32,
}

impl VoiceTools {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        player: Arc<dyn AudioPlayer>,
        default_speaker: u32,
    ) -> Self {
        Self {
            engine,
            player,
            default_speaker,
        }
    }
}
