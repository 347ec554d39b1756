//! Serializable snapshot of the session, the only input the templates see.

use crate::domain::translation::{
    HistoryEntry, LanguageCode, Tone, TranslationInput, TranslationWorkflow, VoiceSettings,
    WorkflowPhase,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToneOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormView {
    pub text: String,
    pub source_lang: &'static str,
    pub target_lang: &'static str,
    pub tone: &'static str,
}

impl From<&TranslationInput> for FormView {
    fn from(input: &TranslationInput) -> Self {
        Self {
            text: input.text.clone(),
            source_lang: input.source_lang.as_str(),
            target_lang: input.target_lang.as_str(),
            tone: input.tone.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslationView {
    pub entry_id: u64,
    pub translated_text: String,
}

#[derive(Debug, Serialize)]
pub struct VoiceView {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryView {
    pub id: u64,
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: &'static str,
    pub target_lang: &'static str,
    pub tone: &'static str,
    pub created_at: String,
}

impl From<&HistoryEntry> for HistoryEntryView {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id.0,
            source_text: entry.record.source_text.clone(),
            translated_text: entry.record.translated_text.clone(),
            source_lang: entry.record.source_lang.as_str(),
            target_lang: entry.record.target_lang.as_str(),
            tone: entry.record.tone.as_str(),
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub phase: WorkflowPhase,
    pub languages: Vec<LanguageOption>,
    pub tones: Vec<ToneOption>,
    pub form: FormView,
    pub error: Option<String>,
    pub translation: Option<TranslationView>,
    pub voices: Vec<VoiceView>,
    pub voice_notice: Option<String>,
    pub settings: VoiceSettings,
    pub has_audio: bool,
    pub history: Vec<HistoryEntryView>,
    pub api_base_url: String,
}

impl PageView {
    /// Build the view for the current session. `prefill` replaces the form
    /// contents, otherwise the last submitted input is shown.
    pub fn from_workflow(
        workflow: &TranslationWorkflow,
        prefill: Option<TranslationInput>,
        api_base_url: &str,
    ) -> Self {
        let state = workflow.state();
        let form_input = prefill
            .or_else(|| workflow.last_input().cloned())
            .unwrap_or_default();

        Self {
            phase: state.phase(),
            languages: LanguageCode::ALL
                .iter()
                .map(|language| LanguageOption {
                    code: language.as_str(),
                    name: language.display_name(),
                })
                .collect(),
            tones: Tone::ALL
                .iter()
                .map(|tone| ToneOption {
                    value: tone.as_str(),
                    label: tone.label(),
                })
                .collect(),
            form: FormView::from(&form_input),
            error: state.error_message().map(|message| message.to_string()),
            translation: state.translation().map(|translation| TranslationView {
                entry_id: translation.entry_id.0,
                translated_text: translation.record.translated_text.clone(),
            }),
            voices: workflow
                .voices()
                .voices()
                .iter()
                .map(|voice| VoiceView {
                    name: voice.name.clone(),
                })
                .collect(),
            voice_notice: workflow.voice_notice().map(|notice| notice.to_string()),
            settings: workflow.voice_settings(),
            has_audio: state.audio().is_some(),
            history: workflow.history().all().map(HistoryEntryView::from).collect(),
            api_base_url: api_base_url.to_string(),
        }
    }
}
