use tracing::{info, warn};

use super::{SpeakTextParams, VoiceTools};
use crate::error::ToolError;
use crate::playback::play_audio;

const PREVIEW_CHARS: usize = 20;

impl VoiceTools {
    pub async fn speak_text(&self, params: SpeakTextParams) -> String {
        match self.try_speak_text(&params).await {
            Ok(()) => {
                info!(chars = params.text.chars().count(), "Played synthesized audio");
                format!("「{}」を再生しました", preview(&params.text))
            }
            Err(e) => {
                warn!(error = %e, "speak_text failed");
                e.render()
            }
        }
    }

    async fn try_speak_text(&self, params: &SpeakTextParams) -> Result<(), ToolError> {
        let voice = params.voice().resolve(self.default_speaker)?;
        let audio = self.engine.synthesize(&params.text, &voice).await?;
        play_audio(self.player.as_ref(), &audio).await
    }
}

/// First 20 characters, with `...` when the text was longer.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
