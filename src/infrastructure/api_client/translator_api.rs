use crate::domain::translation::{ApiError, LanguageCode, SpeechAudio, Tone, Voice, VoiceSettings};
use async_trait::async_trait;

/// Client for the remote translation and speech backend.
///
/// Implementations never panic or raise past this boundary: every failure is
/// returned as an [`ApiError`]. They do not retry, cache, or impose timeouts
/// beyond what the transport does by default.
#[async_trait]
pub trait TranslatorApi: Send + Sync {
    /// List the voices available for a language.
    ///
    /// A non-success status yields an empty list; only transport failures
    /// are returned as errors.
    async fn fetch_voices(&self, language: LanguageCode) -> Result<Vec<Voice>, ApiError>;

    /// Translate `text`. An absent translation in a success response comes
    /// back as an empty string.
    async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
        tone: Tone,
    ) -> Result<String, ApiError>;

    /// Synthesize speech for `text` with the given voice.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        settings: VoiceSettings,
    ) -> Result<SpeechAudio, ApiError>;

    /// Check that the backend answers at all.
    async fn health_check(&self) -> Result<(), ApiError>;
}
