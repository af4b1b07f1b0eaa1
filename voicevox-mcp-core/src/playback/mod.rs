//! Local playback of synthesized audio through an external player

pub mod player;

use tracing::warn;

use crate::error::ToolError;
pub use player::{AudioPlayer, CommandPlayer};

/// Write `audio` to a fresh temporary `.wav` file and play it. The file is
/// removed when this returns, whatever the player did.
pub async fn play_audio(player: &dyn AudioPlayer, audio: &[u8]) -> Result<(), ToolError> {
    let file = tempfile::Builder::new()
        .prefix("voicevox-")
        .suffix(".wav")
        .tempfile()
        .map_err(|e| ToolError::from_io(e, &std::env::temp_dir()))?;

    let path = file.path().to_path_buf();
    tokio::fs::write(&path, audio)
        .await
        .map_err(|e| ToolError::from_io(e, &path))?;

    let result = player.play(&path).await;

    if let Err(e) = file.close() {
        warn!(error = ?e, path = ?path, "Failed to remove temporary audio file");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Records the file it was asked to play and what it contained.
    struct RecordingPlayer {
        seen: Mutex<Option<(PathBuf, Vec<u8>)>>,
        outcome: fn() -> Result<(), ToolError>,
    }

    impl RecordingPlayer {
        fn new(outcome: fn() -> Result<(), ToolError>) -> Self {
            Self {
                seen: Mutex::new(None),
                outcome,
            }
        }

        fn seen(&self) -> (PathBuf, Vec<u8>) {
            self.seen.lock().unwrap().clone().expect("player was not called")
        }
    }

    #[async_trait]
    impl AudioPlayer for RecordingPlayer {
        async fn play(&self, path: &Path) -> Result<(), ToolError> {
            let contents = std::fs::read(path).unwrap();
            *self.seen.lock().unwrap() = Some((path.to_path_buf(), contents));
            (self.outcome)()
        }
    }

    #[tokio::test]
    async fn test_temp_file_holds_audio_and_is_removed() {
        let player = RecordingPlayer::new(|| Ok(()));

        play_audio(&player, b"RIFF-data").await.unwrap();

        let (path, contents) = player.seen();
        assert_eq!(contents, b"RIFF-data");
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wav"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_temp_file_removed_when_player_fails() {
        let player = RecordingPlayer::new(|| Err(ToolError::PlayerFailed(1)));

        let err = play_audio(&player, b"RIFF-data").await.unwrap_err();

        assert!(matches!(err, ToolError::PlayerFailed(1)));
        let (path, _) = player.seen();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_player_executable() {
        let player = CommandPlayer::new("no-such-player-xyz", Vec::new());

        let err = play_audio(&player, b"RIFF").await.unwrap_err();

        assert!(matches!(&err, ToolError::PlayerMissing { program } if program == "no-such-player-xyz"));
        assert_eq!(
            err.render(),
            "エラー: no-such-player-xyzが見つかりません。FFmpegをインストールしてください。"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_player_exit_code_is_reported() {
        // sh -c 'exit 3' sh <file>
        let player = CommandPlayer::new(
            "sh",
            vec!["-c".to_string(), "exit 3".to_string(), "sh".to_string()],
        );

        let err = play_audio(&player, b"RIFF").await.unwrap_err();
        assert!(matches!(err, ToolError::PlayerFailed(3)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_player_receives_file_path_last() {
        let player = CommandPlayer::new(
            "sh",
            vec![
                "-c".to_string(),
                r#"test -s "$1""#.to_string(),
                "sh".to_string(),
            ],
        );

        play_audio(&player, b"RIFF").await.unwrap();
    }
}
