use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, info, warn};

pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Brings the engine up. Returns once the launch command has finished, not
/// when the engine is ready to serve.
#[async_trait]
pub trait EngineLauncher: Send + Sync {
    async fn start(&self) -> bool;
}

/// Launches the engine with `docker compose up -d` from the directory that
/// holds the compose file.
pub struct ComposeLauncher {
    compose_dir: PathBuf,
    program: String,
}

impl ComposeLauncher {
    pub fn new(compose_dir: PathBuf) -> Self {
        Self {
            compose_dir,
            program: "docker".to_string(),
        }
    }

    /// Use a different executable in place of `docker`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl EngineLauncher for ComposeLauncher {
    async fn start(&self) -> bool {
        let compose_file = self.compose_dir.join(COMPOSE_FILE);
        if !compose_file.exists() {
            warn!(path = ?compose_file, "docker-compose.yml not found, skipping auto-start");
            return false;
        }

        debug!(dir = ?self.compose_dir, program = %self.program, "Running docker compose up -d");

        let output = Command::new(&self.program)
            .args(["compose", "up", "-d"])
            .current_dir(&self.compose_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                info!("docker compose up -d finished");
                true
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                error!(
                    exit_code = ?output.status.code(),
                    stderr = %stderr.trim(),
                    "Failed to start VOICEVOX Engine"
                );
                false
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                error!(program = %self.program, "docker command not found");
                false
            }
            Err(e) => {
                error!(error = ?e, "Failed to spawn docker compose");
                false
            }
        }
    }
}
