use super::translator_api::TranslatorApi;
use crate::domain::translation::dto::{
    BackendErrorBody, SynthesizeRequest, TranslateRequest, TranslateResponse, VoicesResponse,
};
use crate::domain::translation::{ApiError, LanguageCode, SpeechAudio, Tone, Voice, VoiceSettings};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;

/// reqwest implementation of [`TranslatorApi`] against the PromptLingo backend
pub struct HttpTranslatorApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTranslatorApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TranslatorApi for HttpTranslatorApi {
    async fn fetch_voices(&self, language: LanguageCode) -> Result<Vec<Voice>, ApiError> {
        let url = self.url(&format!("/voices/{}", language));

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, language = %language, "Voice catalog request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                language = %language,
                "Voice catalog unavailable, continuing without voices"
            );
            return Ok(Vec::new());
        }

        let voices = response
            .json::<VoicesResponse>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse voices: {}", e)))?
            .into_voices();

        tracing::debug!(language = %language, voice_count = voices.len(), "Voices fetched");

        Ok(voices)
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
        tone: Tone,
    ) -> Result<String, ApiError> {
        let start_time = Instant::now();
        let request = TranslateRequest {
            text,
            source_lang,
            target_lang,
            tone,
        };

        tracing::info!(
            source_lang = %source_lang,
            target_lang = %target_lang,
            tone = %tone,
            text_length = text.len(),
            "Calling translation backend"
        );

        let response = self
            .http_client
            .post(self.url("/translate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Translation request failed");
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            let message = serde_json::from_str::<BackendErrorBody>(&body)
                .ok()
                .and_then(|payload| payload.best_message())
                .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
                .unwrap_or_else(|| "Translation failed".to_string());

            tracing::warn!(status = status.as_u16(), message = %message, "Translation rejected");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let payload: TranslateResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse translation: {}", e)))?;

        if let Some(error) = payload.error {
            let message = BackendErrorBody {
                error: Some(error),
                message: payload.message,
            }
            .best_message()
            .unwrap_or_else(|| "Translation failed".to_string());
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let translated_text = payload.translated_text.unwrap_or_default();

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated_text.len(),
            "Translation completed"
        );

        Ok(translated_text)
    }

    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        settings: VoiceSettings,
    ) -> Result<SpeechAudio, ApiError> {
        let start_time = Instant::now();
        let request = SynthesizeRequest {
            text,
            voice_id,
            stability: settings.stability,
            similarity_boost: settings.similarity_boost,
        };

        tracing::info!(
            voice_id = voice_id,
            stability = settings.stability,
            similarity_boost = settings.similarity_boost,
            text_length = text.len(),
            "Calling speech synthesis backend"
        );

        let response = self
            .http_client
            .post(self.url("/synthesize"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id = voice_id, "Synthesis request failed");
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), body = %error_text, "Synthesis rejected");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| value.starts_with("audio/"))
            .map(|value| value.to_string());

        let audio_bytes = response.bytes().await.map_err(ApiError::from)?.to_vec();

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_bytes.len(),
            "Speech synthesis completed"
        );

        let mut audio = SpeechAudio::mp3(audio_bytes);
        if let Some(content_type) = content_type {
            audio.content_type = content_type;
        }
        Ok(audio)
    }

    async fn health_check(&self) -> Result<(), ApiError> {
        let response = self
            .http_client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Backend {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Backend unhealthy")
                    .to_string(),
            })
        }
    }
}
