use super::language::{LanguageCode, Tone};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STABILITY: f32 = 0.5;
pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.5;

/// What the user asked to translate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInput {
    pub text: String,
    pub source_lang: LanguageCode,
    pub target_lang: LanguageCode,
    pub tone: Tone,
}

impl TranslationInput {
    pub fn new(
        text: impl Into<String>,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
        tone: Tone,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang,
            target_lang,
            tone,
        }
    }

    /// Whitespace-only input never reaches the backend
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Default for TranslationInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            source_lang: LanguageCode::English,
            target_lang: LanguageCode::default_target_for(LanguageCode::English),
            tone: Tone::default(),
        }
    }
}

/// One completed translation, as kept in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: LanguageCode,
    pub target_lang: LanguageCode,
    pub tone: Tone,
}

impl TranslationRecord {
    pub fn from_input(input: &TranslationInput, translated_text: String) -> Self {
        Self {
            source_text: input.text.clone(),
            translated_text,
            source_lang: input.source_lang,
            target_lang: input.target_lang,
            tone: input.tone,
        }
    }

    /// Form values that would reproduce this translation
    pub fn to_input(&self) -> TranslationInput {
        TranslationInput {
            text: self.source_text.clone(),
            source_lang: self.source_lang,
            target_lang: self.target_lang,
            tone: self.tone,
        }
    }
}

/// Synthetic voice offered by the voice catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVoice")]
pub struct Voice {
    pub name: String,
    pub voice_id: String,
}

/// Catalogs name the identifier `voice_id`, `voiceId` or `id`, sometimes
/// more than one of them on the same object
#[derive(Deserialize)]
struct RawVoice {
    name: String,
    #[serde(default)]
    voice_id: Option<String>,
    #[serde(rename = "voiceId", default)]
    voice_id_camel: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

impl TryFrom<RawVoice> for Voice {
    type Error = String;

    fn try_from(raw: RawVoice) -> Result<Self, Self::Error> {
        let voice_id = raw
            .voice_id
            .or(raw.voice_id_camel)
            .or(raw.id)
            .ok_or_else(|| format!("voice '{}' has no id", raw.name))?;
        Ok(Self {
            name: raw.name,
            voice_id,
        })
    }
}

/// Voices available for the current translation, looked up by display name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self { voices }
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Resolve a display name to its voice id. Later entries shadow earlier
    /// ones with the same name.
    pub fn voice_id_for(&self, name: &str) -> Option<&str> {
        self.voices
            .iter()
            .rev()
            .find(|voice| voice.name == name)
            .map(|voice| voice.voice_id.as_str())
    }
}

/// Tunables forwarded to the speech backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl VoiceSettings {
    /// Build settings from optional user overrides, clamped to [0, 1]
    pub fn with_overrides(stability: Option<f32>, similarity_boost: Option<f32>) -> Self {
        Self {
            stability: clamp_unit(stability.unwrap_or(DEFAULT_STABILITY)),
            similarity_boost: clamp_unit(similarity_boost.unwrap_or(DEFAULT_SIMILARITY_BOOST)),
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: DEFAULT_STABILITY,
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
        }
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Synthesized audio held for playback and download
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechAudio {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl SpeechAudio {
    pub fn mp3(data: Vec<u8>) -> Self {
        Self {
            data,
            content_type: "audio/mpeg".to_string(),
        }
    }
}
