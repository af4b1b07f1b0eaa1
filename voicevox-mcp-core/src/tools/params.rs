use schemars::JsonSchema;
use serde::Deserialize;

use crate::engine::VoiceOptions;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveAudioParams {
    /// 読み上げるテキスト
    pub text: String,

    /// 保存先のファイルパス（.wav）
    pub output_path: String,

    /// スピーカーID（指定しない場合は環境変数SPEAKER_IDの値を使用。list_speakersで一覧を確認できます）
    #[serde(default)]
    pub speaker: Option<u32>,

    /// 話速 (0.5 〜 2.0, デフォルト: 1.0)
    #[serde(default)]
    pub speed: Option<f64>,

    /// 音高 (-0.15 〜 0.15, デフォルト: 0.0)
    #[serde(default)]
    pub pitch: Option<f64>,

    /// 抑揚 (0.0 〜 2.0, デフォルト: 1.0)
    #[serde(default)]
    pub intonation: Option<f64>,

    /// 音量 (0.0 〜 2.0, デフォルト: 1.0)
    #[serde(default)]
    pub volume: Option<f64>,
}

impl SaveAudioParams {
    pub fn voice(&self) -> VoiceOptions {
        VoiceOptions {
            speaker: self.speaker,
            speed: self.speed,
            pitch: self.pitch,
            intonation: self.intonation,
            volume: self.volume,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SpeakTextParams {
    /// 読み上げるテキスト
    pub text: String,

    /// スピーカーID（指定しない場合は環境変数SPEAKER_IDの値を使用。list_speakersで一覧を確認できます）
    #[serde(default)]
    pub speaker: Option<u32>,

    /// 話速 (0.5 〜 2.0, デフォルト: 1.0)
    #[serde(default)]
    pub speed: Option<f64>,

    /// 音高 (-0.15 〜 0.15, デフォルト: 0.0)
    #[serde(default)]
    pub pitch: Option<f64>,

    /// 抑揚 (0.0 〜 2.0, デフォルト: 1.0)
    #[serde(default)]
    pub intonation: Option<f64>,

    /// 音量 (0.0 〜 2.0, デフォルト: 1.0)
    #[serde(default)]
    pub volume: Option<f64>,
}

impl SpeakTextParams {
    pub fn voice(&self) -> VoiceOptions {
        VoiceOptions {
            speaker: self.speaker,
            speed: self.speed,
            pitch: self.pitch,
            intonation: self.intonation,
            volume: self.volume,
        }
    }
}
