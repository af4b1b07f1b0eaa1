use std::path::{Path, PathBuf};

use thiserror::Error;

/// Every failure a tool call can hit. Handlers never return these to the MCP
/// runtime; they are rendered to text with [`ToolError::render`].
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("engine unreachable at {url}")]
    Connection { url: String },

    #[error("engine returned status {0}")]
    HttpStatus(u16),

    #[error("permission denied writing {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("player executable '{program}' not found")]
    PlayerMissing { program: String },

    #[error("player exited with code {0}")]
    PlayerFailed(i32),

    #[error("{name} out of range [{min}, {max}]: {value}")]
    Validation {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("output path is empty")]
    EmptyOutputPath,

    #[error("{kind}: {message}")]
    Unclassified { kind: String, message: String },
}

impl ToolError {
    /// Classify an I/O failure that happened while touching `path`.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            kind => Self::Unclassified {
                kind: format!("{kind:?}"),
                message: err.to_string(),
            },
        }
    }

    /// The localized message returned to the tool caller.
    pub fn render(&self) -> String {
        match self {
            Self::Connection { url } => format!(
                "エラー: VOICEVOX Engine ({url}) に接続できません。Dockerコンテナが起動しているか確認してください。"
            ),
            Self::HttpStatus(status) => {
                format!("エラー: VOICEVOX API エラー (status: {status})")
            }
            Self::PermissionDenied { path } => {
                format!("エラー: ファイルの書き込み権限がありません: {}", path.display())
            }
            Self::PlayerMissing { program } => {
                format!("エラー: {program}が見つかりません。FFmpegをインストールしてください。")
            }
            Self::PlayerFailed(code) => {
                format!("エラー: 音声再生に失敗しました (code: {code})")
            }
            // Debug formatting keeps the decimal point: 2.0 renders as "2.0", not "2".
            Self::Validation {
                name,
                min,
                max,
                value,
            } => format!(
                "エラー: {name}は{min:?}から{max:?}の範囲で指定してください (指定値: {value:?})"
            ),
            Self::EmptyOutputPath => "エラー: output_pathを指定してください".to_string(),
            Self::Unclassified { kind, message } => format!("エラー: {kind}: {message}"),
        }
    }
}
