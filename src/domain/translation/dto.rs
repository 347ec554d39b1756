use super::language::{LanguageCode, Tone};
use super::model::Voice;
use serde::{Deserialize, Serialize};

/// Body of POST {base}/translate
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
    pub source_lang: LanguageCode,
    pub target_lang: LanguageCode,
    pub tone: Tone,
}

/// Success body of POST {base}/translate
#[derive(Debug, Default, Deserialize)]
#[serde(from = "RawTranslateResponse")]
pub struct TranslateResponse {
    pub translated_text: Option<String>,
    /// Some backends report failures inside a 200 body
    pub error: Option<serde_json::Value>,
    pub message: Option<String>,
}

/// Wire shape: the text arrives as `translatedText`, `translation` or both
#[derive(Deserialize)]
struct RawTranslateResponse {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
    #[serde(default)]
    translation: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl From<RawTranslateResponse> for TranslateResponse {
    fn from(raw: RawTranslateResponse) -> Self {
        Self {
            translated_text: raw.translated_text.or(raw.translation),
            error: raw.error,
            message: raw.message,
        }
    }
}

/// Body of POST {base}/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest<'a> {
    pub text: &'a str,
    #[serde(rename = "voiceId")]
    pub voice_id: &'a str,
    pub stability: f32,
    pub similarity_boost: f32,
}

/// GET {base}/voices/{code} answers either a bare list or `{ "voices": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VoicesResponse {
    List(Vec<Voice>),
    Wrapped { voices: Vec<Voice> },
}

impl VoicesResponse {
    pub fn into_voices(self) -> Vec<Voice> {
        match self {
            VoicesResponse::List(voices) => voices,
            VoicesResponse::Wrapped { voices } => voices,
        }
    }
}

/// Error payload shape used by the backend: `{ "error": ..., "message": ... }`
#[derive(Debug, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BackendErrorBody {
    /// Most specific human readable message in the payload
    pub fn best_message(&self) -> Option<String> {
        if let Some(message) = self.message.as_ref().filter(|m| !m.trim().is_empty()) {
            return Some(message.clone());
        }

        match &self.error {
            Some(serde_json::Value::String(error)) if !error.trim().is_empty() => {
                Some(error.clone())
            }
            Some(serde_json::Value::Object(fields)) => fields
                .get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string()),
            _ => None,
        }
    }
}
