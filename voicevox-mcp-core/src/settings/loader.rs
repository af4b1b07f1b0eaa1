use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::settings::config::Settings;

pub const ENV_ENGINE_URL: &str = "VOICEVOX_URL";
pub const ENV_SPEAKER_ID: &str = "SPEAKER_ID";
pub const ENV_AUTO_START: &str = "AUTO_START_ENGINE";
pub const ENV_COMPOSE_DIR: &str = "VOICEVOX_COMPOSE_DIR";
pub const ENV_PLAYER: &str = "VOICEVOX_PLAYER";

impl Settings {
    /// Load settings from `path` (or the default location when it exists),
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_settings_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Settings::default(),
            },
        };

        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Parse a TOML settings file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;
        let mut settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {path:?}"))?;
        settings.normalize();
        debug!(path = ?path, "Loaded settings file");
        Ok(settings)
    }

    /// Overlay environment variables. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_ENGINE_URL) {
            self.engine_url = url;
        }

        if let Some(raw) = lookup(ENV_SPEAKER_ID) {
            self.default_speaker = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SPEAKER_ID} must be an integer, got {raw:?}"))?;
        }

        // Only the literal "true" enables auto-start, anything else disables it.
        if let Some(raw) = lookup(ENV_AUTO_START) {
            self.auto_start_engine = raw.eq_ignore_ascii_case("true");
        }

        if let Some(dir) = lookup(ENV_COMPOSE_DIR) {
            self.compose_dir = Some(PathBuf::from(dir));
        }

        if let Some(command) = lookup(ENV_PLAYER) {
            self.player.command = command;
        }

        self.normalize();
        Ok(())
    }
}

/// ~/.voicevox-mcp/settings.toml
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".voicevox-mcp").join("settings.toml"))
}
