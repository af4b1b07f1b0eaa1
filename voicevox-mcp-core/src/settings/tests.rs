use std::collections::HashMap;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::engine::launcher::COMPOSE_FILE;
use crate::settings::config::{project_dir, DEFAULT_ENGINE_URL, DEFAULT_SPEAKER_ID};
use crate::settings::Settings;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.engine_url, DEFAULT_ENGINE_URL);
    assert_eq!(settings.default_speaker, DEFAULT_SPEAKER_ID);
    assert!(settings.auto_start_engine);
    assert_eq!(settings.player.command, "ffplay");
    assert_eq!(
        settings.player.args,
        vec!["-nodisp", "-autoexit", "-loglevel", "quiet"]
    );
}

#[test]
fn test_env_overrides() {
    let mut settings = Settings::default();
    settings
        .apply_env(env(&[
            ("VOICEVOX_URL", "http://engine:50021/"),
            ("SPEAKER_ID", "3"),
            ("AUTO_START_ENGINE", "false"),
            ("VOICEVOX_COMPOSE_DIR", "/srv/voicevox"),
            ("VOICEVOX_PLAYER", "/usr/local/bin/ffplay"),
        ]))
        .unwrap();

    assert_eq!(settings.engine_url, "http://engine:50021");
    assert_eq!(settings.default_speaker, 3);
    assert!(!settings.auto_start_engine);
    assert_eq!(settings.compose_dir, Some(PathBuf::from("/srv/voicevox")));
    assert_eq!(settings.compose_dir(), PathBuf::from("/srv/voicevox"));
    assert_eq!(settings.player.command, "/usr/local/bin/ffplay");
}

#[test]
fn test_auto_start_accepts_only_true() {
    for (raw, expected) in [("TRUE", true), ("True", true), ("1", false), ("yes", false)] {
        let mut settings = Settings::default();
        settings
            .apply_env(env(&[("AUTO_START_ENGINE", raw)]))
            .unwrap();
        assert_eq!(settings.auto_start_engine, expected, "value {raw:?}");
    }
}

#[test]
fn test_invalid_speaker_id_is_an_error() {
    let mut settings = Settings::default();
    let err = settings
        .apply_env(env(&[("SPEAKER_ID", "zundamon")]))
        .unwrap_err();
    assert!(err.to_string().contains("SPEAKER_ID"));
}

#[test]
fn test_from_file_fills_missing_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
engine_url = "http://10.0.0.5:50021"

[player]
command = "mpv"
args = ["--no-video"]
"#,
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.engine_url, "http://10.0.0.5:50021");
    assert_eq!(settings.default_speaker, DEFAULT_SPEAKER_ID);
    assert!(settings.auto_start_engine);
    assert_eq!(settings.player.command, "mpv");
    assert_eq!(settings.player.args, vec!["--no-video"]);
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "default_speaker = \"eight\"").unwrap();

    assert!(Settings::from_file(&path).is_err());
}

#[test]
fn test_default_compose_dir_is_project_root() {
    let compose_dir = Settings::default().compose_dir();

    assert_eq!(compose_dir, project_dir());
    assert!(compose_dir.join(COMPOSE_FILE).is_file());
}

