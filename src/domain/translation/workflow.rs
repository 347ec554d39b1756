use super::error::{ApiError, WorkflowError};
use super::history::{EntryId, HistoryLog};
use super::language::LanguageCode;
use super::model::{SpeechAudio, TranslationInput, TranslationRecord, VoiceCatalog, VoiceSettings};
use crate::infrastructure::api_client::TranslatorApi;
use serde::Serialize;
use std::sync::Arc;

/// The translation currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTranslation {
    pub entry_id: EntryId,
    pub record: TranslationRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Translating,
    Translated(CurrentTranslation),
    Synthesizing(CurrentTranslation),
    SpeechReady {
        translation: CurrentTranslation,
        audio: SpeechAudio,
    },
    /// `translation` survives a failed synthesis so another voice can be tried
    Error {
        message: String,
        translation: Option<CurrentTranslation>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    Idle,
    Translating,
    Translated,
    Synthesizing,
    SpeechReady,
    Error,
}

impl WorkflowState {
    pub fn phase(&self) -> WorkflowPhase {
        match self {
            WorkflowState::Idle => WorkflowPhase::Idle,
            WorkflowState::Translating => WorkflowPhase::Translating,
            WorkflowState::Translated(_) => WorkflowPhase::Translated,
            WorkflowState::Synthesizing(_) => WorkflowPhase::Synthesizing,
            WorkflowState::SpeechReady { .. } => WorkflowPhase::SpeechReady,
            WorkflowState::Error { .. } => WorkflowPhase::Error,
        }
    }

    pub fn translation(&self) -> Option<&CurrentTranslation> {
        match self {
            WorkflowState::Translated(translation)
            | WorkflowState::Synthesizing(translation)
            | WorkflowState::SpeechReady { translation, .. } => Some(translation),
            WorkflowState::Error { translation, .. } => translation.as_ref(),
            WorkflowState::Idle | WorkflowState::Translating => None,
        }
    }

    pub fn audio(&self) -> Option<&SpeechAudio> {
        match self {
            WorkflowState::SpeechReady { audio, .. } => Some(audio),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            WorkflowState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Orchestrates one session: translate, record history, offer voices,
/// synthesize. The history log is owned here and only changes through these
/// operations.
pub struct TranslationWorkflow {
    api: Arc<dyn TranslatorApi>,
    history: HistoryLog,
    state: WorkflowState,
    voices: VoiceCatalog,
    voice_notice: Option<String>,
    voice_language: LanguageCode,
    voice_settings: VoiceSettings,
    last_input: Option<TranslationInput>,
}

impl TranslationWorkflow {
    pub fn new(api: Arc<dyn TranslatorApi>) -> Self {
        Self::with_history(api, HistoryLog::new())
    }

    pub fn with_history(api: Arc<dyn TranslatorApi>, history: HistoryLog) -> Self {
        Self {
            api,
            history,
            state: WorkflowState::Idle,
            voices: VoiceCatalog::default(),
            voice_notice: None,
            voice_language: LanguageCode::English,
            voice_settings: VoiceSettings::default(),
            last_input: None,
        }
    }

    /// Catalog language used for every voice lookup. The backend only
    /// serves a few catalogs, so this is fixed rather than following the
    /// translation's target language.
    pub fn with_voice_language(mut self, language: LanguageCode) -> Self {
        self.voice_language = language;
        self
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }

    /// Why the voice list is empty, when fetching it failed
    pub fn voice_notice(&self) -> Option<&str> {
        self.voice_notice.as_deref()
    }

    pub fn voice_language(&self) -> LanguageCode {
        self.voice_language
    }

    /// Settings of the last synthesis request, defaults before the first one
    pub fn voice_settings(&self) -> VoiceSettings {
        self.voice_settings
    }

    pub fn last_input(&self) -> Option<&TranslationInput> {
        self.last_input.as_ref()
    }

    /// Submit text for translation.
    ///
    /// Blank input is rejected before any network call and leaves the state
    /// untouched. Otherwise the previous translation and audio are discarded;
    /// on success the record is appended to history and the voice list is
    /// refreshed.
    pub async fn submit(
        &mut self,
        input: TranslationInput,
    ) -> Result<CurrentTranslation, WorkflowError> {
        if input.is_blank() {
            tracing::debug!("Ignoring blank translation input");
            return Err(WorkflowError::EmptyInput);
        }

        self.state = WorkflowState::Translating;
        self.voices = VoiceCatalog::default();
        self.voice_notice = None;
        self.last_input = Some(input.clone());

        let result = self
            .api
            .translate(&input.text, input.source_lang, input.target_lang, input.tone)
            .await;

        let translated_text = match result {
            Ok(text) => text,
            Err(e) => return Err(self.fail_translation(e)),
        };

        let record = TranslationRecord::from_input(&input, translated_text);
        let entry_id = self.history.append(record.clone());

        tracing::info!(
            entry_id = %entry_id,
            source_lang = %record.source_lang,
            target_lang = %record.target_lang,
            tone = %record.tone,
            history_len = self.history.len(),
            "Translation recorded"
        );

        let translation = CurrentTranslation { entry_id, record };
        self.state = WorkflowState::Translated(translation.clone());
        self.refresh_voices().await;

        Ok(translation)
    }

    /// Reload the voice catalog once a translation is on screen. Failures
    /// only leave the list empty with a notice.
    pub async fn refresh_voices(&mut self) {
        if self.state.translation().is_none() {
            return;
        }
        let language = self.voice_language;

        match self.api.fetch_voices(language).await {
            Ok(voices) => {
                self.voice_notice = None;
                self.voices = VoiceCatalog::new(voices);
            }
            Err(e) => {
                tracing::warn!(error = %e, language = %language, "Voice catalog unavailable");
                self.voices = VoiceCatalog::default();
                self.voice_notice = Some(format!("Error fetching voices: {}", e));
            }
        }
    }

    /// Synthesize the current translation with a voice id.
    pub async fn synthesize(
        &mut self,
        voice_id: &str,
        settings: VoiceSettings,
    ) -> Result<(), WorkflowError> {
        let translation = self
            .state
            .translation()
            .cloned()
            .ok_or(WorkflowError::NothingToSynthesize)?;

        self.voice_settings = settings;
        self.state = WorkflowState::Synthesizing(translation.clone());

        let result = self
            .api
            .synthesize(&translation.record.translated_text, voice_id, settings)
            .await;

        match result {
            Ok(audio) => {
                tracing::info!(
                    entry_id = %translation.entry_id,
                    voice_id = voice_id,
                    audio_size_bytes = audio.data.len(),
                    "Speech ready"
                );
                self.state = WorkflowState::SpeechReady { translation, audio };
                Ok(())
            }
            Err(e) => {
                let err = WorkflowError::Synthesis(e);
                tracing::warn!(error = %err, voice_id = voice_id, "Speech synthesis failed");
                self.state = WorkflowState::Error {
                    message: err.to_string(),
                    translation: Some(translation),
                };
                Err(err)
            }
        }
    }

    /// Synthesize with a voice picked by its display name.
    pub async fn synthesize_with_voice(
        &mut self,
        voice_name: &str,
        settings: VoiceSettings,
    ) -> Result<(), WorkflowError> {
        if self.state.translation().is_none() {
            return Err(WorkflowError::NothingToSynthesize);
        }
        let voice_id = self
            .voices
            .voice_id_for(voice_name)
            .map(|id| id.to_string())
            .ok_or_else(|| WorkflowError::UnknownVoice(voice_name.to_string()))?;

        self.synthesize(&voice_id, settings).await
    }

    /// Delete a history entry by id. Stale ids are ignored.
    pub fn delete_history_entry(&mut self, id: EntryId) -> bool {
        let removed = self.history.delete(id).is_some();
        tracing::debug!(entry_id = %id, removed, "History delete requested");
        removed
    }

    /// Delete a history entry by position. Out-of-range positions are ignored.
    pub fn delete_history_at(&mut self, index: usize) -> bool {
        self.history.delete_at(index).is_some()
    }

    fn fail_translation(&mut self, e: ApiError) -> WorkflowError {
        let err = WorkflowError::Translation(e);
        tracing::warn!(error = %err, "Translation failed");
        self.state = WorkflowState::Error {
            message: err.to_string(),
            translation: None,
        };
        err
    }
}
