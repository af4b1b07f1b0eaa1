use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ENGINE_URL: &str = "http://localhost:50021";
pub const DEFAULT_SPEAKER_ID: u32 = 8;

/// Runtime configuration. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the VOICEVOX engine, without a trailing slash
    pub engine_url: String,

    /// Style id used when a tool call does not name a speaker
    pub default_speaker: u32,

    /// Start the engine through docker compose when it is not reachable
    pub auto_start_engine: bool,

    /// Directory holding docker-compose.yml. Defaults to the project root.
    pub compose_dir: Option<PathBuf>,

    pub player: PlayerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_url: DEFAULT_ENGINE_URL.to_string(),
            default_speaker: DEFAULT_SPEAKER_ID,
            auto_start_engine: true,
            compose_dir: None,
            player: PlayerSettings::default(),
        }
    }
}

impl Settings {
    pub fn compose_dir(&self) -> PathBuf {
        self.compose_dir.clone().unwrap_or_else(project_dir)
    }

    pub(crate) fn normalize(&mut self) {
        let trimmed = self.engine_url.trim_end_matches('/').len();
        self.engine_url.truncate(trimmed);
    }
}

/// Workspace root, where the bundled docker-compose.yml lives. Resolved at
/// build time so it does not depend on the directory the server is started from.
pub fn project_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// External command used for playback. The audio file path is appended as the
/// last argument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            command: "ffplay".to_string(),
            args: ["-nodisp", "-autoexit", "-loglevel", "quiet"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
