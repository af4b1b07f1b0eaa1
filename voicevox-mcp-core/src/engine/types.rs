use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Inclusive domain for one scale parameter.
#[derive(Debug, Clone, Copy)]
pub struct ScaleRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const SPEED: ScaleRange = ScaleRange {
    name: "speed",
    min: 0.5,
    max: 2.0,
    default: 1.0,
};

pub const PITCH: ScaleRange = ScaleRange {
    name: "pitch",
    min: -0.15,
    max: 0.15,
    default: 0.0,
};

pub const INTONATION: ScaleRange = ScaleRange {
    name: "intonation",
    min: 0.0,
    max: 2.0,
    default: 1.0,
};

pub const VOLUME: ScaleRange = ScaleRange {
    name: "volume",
    min: 0.0,
    max: 2.0,
    default: 1.0,
};

impl ScaleRange {
    /// Resolve an optional value to its default and check it against the
    /// domain. NaN is never in range.
    pub fn resolve(&self, value: Option<f64>) -> Result<f64, ToolError> {
        let value = value.unwrap_or(self.default);
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(ToolError::Validation {
                name: self.name,
                min: self.min,
                max: self.max,
                value,
            })
        }
    }
}

/// Validated voice settings for a single synthesis call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParameters {
    pub speaker: u32,
    pub speed: f64,
    pub pitch: f64,
    pub intonation: f64,
    pub volume: f64,
}

/// Optional voice settings exactly as a tool caller supplied them.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceOptions {
    pub speaker: Option<u32>,
    pub speed: Option<f64>,
    pub pitch: Option<f64>,
    pub intonation: Option<f64>,
    pub volume: Option<f64>,
}

impl VoiceOptions {
    /// Fill defaults and validate in speed, pitch, intonation, volume order.
    /// The first violation wins.
    pub fn resolve(self, default_speaker: u32) -> Result<VoiceParameters, ToolError> {
        Ok(VoiceParameters {
            speaker: self.speaker.unwrap_or(default_speaker),
            speed: SPEED.resolve(self.speed)?,
            pitch: PITCH.resolve(self.pitch)?,
            intonation: INTONATION.resolve(self.intonation)?,
            volume: VOLUME.resolve(self.volume)?,
        })
    }
}

/// Engine-defined description of how to read a text. Kept opaque apart from
/// the four scale fields this crate overwrites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AudioQuery(Map<String, Value>);

impl AudioQuery {
    pub fn apply(&mut self, params: &VoiceParameters) {
        self.0.insert("speedScale".to_string(), params.speed.into());
        self.0.insert("pitchScale".to_string(), params.pitch.into());
        self.0
            .insert("intonationScale".to_string(), params.intonation.into());
        self.0.insert("volumeScale".to_string(), params.volume.into());
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// One entry of `GET /speakers`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Speaker {
    pub name: String,
    #[serde(default)]
    pub styles: Vec<SpeakerStyle>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SpeakerStyle {
    pub name: String,
    pub id: u32,
}
