use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{SaveAudioParams, VoiceTools};
use crate::error::ToolError;

impl VoiceTools {
    pub async fn save_audio(&self, params: SaveAudioParams) -> String {
        match self.try_save_audio(&params).await {
            Ok(path) => {
                info!(path = ?path, "Saved synthesized audio");
                format!("音声ファイルを保存しました: {}", path.display())
            }
            Err(e) => {
                warn!(error = %e, output_path = %params.output_path, "save_audio failed");
                e.render()
            }
        }
    }

    async fn try_save_audio(&self, params: &SaveAudioParams) -> Result<PathBuf, ToolError> {
        let voice = params.voice().resolve(self.default_speaker)?;
        let path = normalize_output_path(&params.output_path)?;

        let audio = self.engine.synthesize(&params.text, &voice).await?;
        write_audio(&path, &audio).await?;

        Ok(path)
    }
}

/// Force a `.wav` extension unless the path already has one in any case.
pub fn normalize_output_path(raw: &str) -> Result<PathBuf, ToolError> {
    if raw.trim().is_empty() {
        return Err(ToolError::EmptyOutputPath);
    }

    let mut path = PathBuf::from(raw);
    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if !is_wav {
        path.set_extension("wav");
    }
    Ok(path)
}

/// Existing files are overwritten.
async fn write_audio(path: &Path, audio: &[u8]) -> Result<(), ToolError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ToolError::from_io(e, path))?;
    }

    tokio::fs::write(path, audio)
        .await
        .map_err(|e| ToolError::from_io(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("x/y/clip", "x/y/clip.wav")]
    #[case("clip.WAV", "clip.WAV")]
    #[case("clip.wav", "clip.wav")]
    #[case("clip.Wav", "clip.Wav")]
    #[case("clip.mp3", "clip.wav")]
    #[case("take.2.ogg", "take.2.wav")]
    #[case("out/voice/", "out/voice.wav")]
    fn test_normalize_output_path(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_output_path(raw).unwrap(), PathBuf::from(expected));
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        assert!(matches!(
            normalize_output_path("  "),
            Err(ToolError::EmptyOutputPath)
        ));
    }

    #[tokio::test]
    async fn test_write_audio_creates_parents_and_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("clip.wav");

        write_audio(&path, b"first").await.unwrap();
        write_audio(&path, b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_audio_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o500)).unwrap();

        // root bypasses directory permissions
        if std::fs::write(locked.join(".writable"), b"").is_ok() {
            eprintln!("skipping test_write_audio_permission_denied: directory permissions not enforced");
            return;
        }

        let path = locked.join("clip.wav");
        let result = write_audio(&path, b"data").await;

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o700)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, ToolError::PermissionDenied { .. }));
        assert_eq!(
            err.render(),
            format!("エラー: ファイルの書き込み権限がありません: {}", path.display())
        );
    }

    #[tokio::test]
    async fn test_write_audio_under_regular_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let path = blocker.join("clip.wav");
        let err = write_audio(&path, b"data").await.unwrap_err();

        assert!(err.render().starts_with("エラー: "), "got: {}", err.render());
        assert!(!path.exists());
    }
}
