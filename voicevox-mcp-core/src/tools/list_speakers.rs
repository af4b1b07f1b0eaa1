use tracing::{info, warn};

use super::VoiceTools;
use crate::engine::Speaker;

impl VoiceTools {
    /// One line per (speaker, style) with the id to pass as `speaker`.
    pub async fn list_speakers(&self) -> String {
        match self.engine.speakers().await {
            Ok(speakers) => {
                info!(speakers = speakers.len(), "Listed speakers");
                format_speakers(&speakers)
            }
            Err(e) => {
                warn!(error = %e, "list_speakers failed");
                e.render()
            }
        }
    }
}

fn format_speakers(speakers: &[Speaker]) -> String {
    let lines: Vec<String> = speakers
        .iter()
        .flat_map(|speaker| {
            speaker.styles.iter().map(move |style| {
                format!(
                    "- {}（{}）: speaker_id={}",
                    speaker.name, style.name, style.id
                )
            })
        })
        .collect();

    format!("利用可能なスピーカー一覧:\n{}", lines.join("\n"))
}
