use std::time::Duration;
use tracing::{info, warn};

use super::launcher::EngineLauncher;
use super::provider::SpeechEngine;

/// How long to wait for a freshly launched engine.
#[derive(Debug, Clone, Copy)]
pub struct StartupPolicy {
    pub poll_interval: Duration,
    pub max_attempts: u32,
}

impl Default for StartupPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_attempts: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStartup {
    Disabled,
    AlreadyRunning,
    Started,
    NotResponding,
    LaunchFailed,
}

/// Make sure the engine is up before serving tool calls. Runs once at
/// startup; the outcome is only logged, never fatal.
pub async fn ensure_running(
    auto_start: bool,
    engine: &dyn SpeechEngine,
    launcher: &dyn EngineLauncher,
    policy: StartupPolicy,
) -> EngineStartup {
    if !auto_start {
        return EngineStartup::Disabled;
    }

    if engine.is_running().await {
        return EngineStartup::AlreadyRunning;
    }

    info!(url = %engine.base_url(), "VOICEVOX Engine not running, starting...");
    if !launcher.start().await {
        return EngineStartup::LaunchFailed;
    }

    for _ in 0..policy.max_attempts {
        tokio::time::sleep(policy.poll_interval).await;
        if engine.is_running().await {
            info!("VOICEVOX Engine started successfully");
            return EngineStartup::Started;
        }
    }

    warn!(
        attempts = policy.max_attempts,
        "VOICEVOX Engine started but not responding yet"
    );
    EngineStartup::NotResponding
}
