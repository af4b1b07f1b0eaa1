use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::settings::PlayerSettings;

/// Plays an audio file and returns once playback has finished.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    async fn play(&self, path: &Path) -> Result<(), ToolError>;
}

/// Runs an external player process (ffplay by default) headless, appending
/// the file path as the last argument.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self::new(settings.command.clone(), settings.args.clone())
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    async fn play(&self, path: &Path) -> Result<(), ToolError> {
        debug!(program = %self.program, path = ?path, "Starting playback");

        // output() captures stdout and stderr, so nothing reaches the MCP channel.
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ToolError::PlayerMissing {
                    program: self.program.clone(),
                },
                kind => ToolError::Unclassified {
                    kind: format!("{kind:?}"),
                    message: e.to_string(),
                },
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            exit_code = ?output.status.code(),
            stderr = %stderr.trim(),
            "Player exited with non-zero status"
        );
        // Killed by a signal: no exit code to report.
        Err(ToolError::PlayerFailed(output.status.code().unwrap_or(-1)))
    }
}
