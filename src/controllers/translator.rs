use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    domain::translation::{
        EntryId, LanguageCode, Tone, TranslationInput, TranslationWorkflow, VoiceSettings,
        WorkflowError,
    },
    error::{AppError, AppResult},
    presentation::{PageRenderer, PageView},
};

const AUDIO_FILE_NAME: &str = "translation.mp3";

/// Form posted by the translate button
#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    pub source_lang: String,
    pub target_lang: Option<String>,
    pub tone: Option<String>,
}

impl TranslateForm {
    fn into_input(self) -> AppResult<TranslationInput> {
        let source_lang: LanguageCode = self.source_lang.parse().map_err(AppError::BadRequest)?;
        let target_lang = match self.target_lang.as_deref() {
            Some(code) if !code.trim().is_empty() => code.parse().map_err(AppError::BadRequest)?,
            _ => LanguageCode::default_target_for(source_lang),
        };
        let tone = match self.tone.as_deref() {
            Some(tone) if !tone.trim().is_empty() => tone.parse().map_err(AppError::BadRequest)?,
            _ => Tone::default(),
        };

        Ok(TranslationInput::new(self.text, source_lang, target_lang, tone))
    }
}

/// Form posted by the generate speech button
#[derive(Debug, Deserialize)]
pub struct SynthesizeForm {
    pub voice: String,
    pub stability: Option<f32>,
    pub similarity_boost: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub reuse: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AudioQuery {
    #[serde(default)]
    pub download: bool,
}

/// Serves the translator page. Every handler applies one event to the
/// session and then renders the page from the resulting state.
pub struct TranslatorController {
    session: Arc<Mutex<TranslationWorkflow>>,
    renderer: Arc<PageRenderer>,
    api_base_url: String,
}

impl TranslatorController {
    pub fn new(
        session: Arc<Mutex<TranslationWorkflow>>,
        renderer: Arc<PageRenderer>,
        api_base_url: String,
    ) -> Self {
        Self {
            session,
            renderer,
            api_base_url,
        }
    }

    fn render(
        &self,
        workflow: &TranslationWorkflow,
        prefill: Option<TranslationInput>,
    ) -> AppResult<Html<String>> {
        let view = PageView::from_workflow(workflow, prefill, &self.api_base_url);
        Ok(Html(self.renderer.render(&view)?))
    }

    /// GET / - Render the page, optionally prefilled from a history entry
    pub async fn index(
        State(controller): State<Arc<TranslatorController>>,
        Query(query): Query<IndexQuery>,
    ) -> AppResult<Html<String>> {
        let workflow = controller.session.lock().await;

        let prefill = query
            .reuse
            .and_then(|id| workflow.history().get(EntryId(id)))
            .map(|entry| entry.record.to_input());

        controller.render(&workflow, prefill)
    }

    /// POST /translate - Submit text for translation
    pub async fn translate(
        State(controller): State<Arc<TranslatorController>>,
        Form(form): Form<TranslateForm>,
    ) -> AppResult<Html<String>> {
        let input = form.into_input()?;
        let mut workflow = controller.session.lock().await;

        match workflow.submit(input.clone()).await {
            Ok(_) => {}
            // Blank input: nothing happens, but keep what the user typed
            Err(WorkflowError::EmptyInput) => return controller.render(&workflow, Some(input)),
            // The failure is recorded in the workflow state and rendered
            Err(WorkflowError::Translation(_)) => {}
            Err(e) => return Err(e.into()),
        }

        controller.render(&workflow, None)
    }

    /// POST /synthesize - Generate speech for the current translation
    pub async fn synthesize(
        State(controller): State<Arc<TranslatorController>>,
        Form(form): Form<SynthesizeForm>,
    ) -> AppResult<Html<String>> {
        let settings = VoiceSettings::with_overrides(form.stability, form.similarity_boost);
        let mut workflow = controller.session.lock().await;

        match workflow.synthesize_with_voice(&form.voice, settings).await {
            Ok(()) | Err(WorkflowError::Synthesis(_)) => {}
            Err(e) => return Err(e.into()),
        }

        controller.render(&workflow, None)
    }

    /// POST /history/{id}/delete - Remove a history entry
    pub async fn delete_history_entry(
        State(controller): State<Arc<TranslatorController>>,
        Path(entry_id): Path<u64>,
    ) -> AppResult<Html<String>> {
        let mut workflow = controller.session.lock().await;
        workflow.delete_history_entry(EntryId(entry_id));

        controller.render(&workflow, None)
    }

    /// GET /audio - Stream the synthesized speech, optionally as a download
    pub async fn audio(
        State(controller): State<Arc<TranslatorController>>,
        Query(query): Query<AudioQuery>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let workflow = controller.session.lock().await;
        let audio = workflow
            .state()
            .audio()
            .ok_or_else(|| AppError::NotFound("No synthesized audio available".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&audio.content_type)
                .unwrap_or_else(|_| HeaderValue::from_static("audio/mpeg")),
        );
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        if query.download {
            headers.insert(
                header::CONTENT_DISPOSITION,
                HeaderValue::from_str(&format!("attachment; filename=\"{}\"", AUDIO_FILE_NAME))
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            );
        }

        Ok((StatusCode::OK, headers, Body::from(audio.data.clone())))
    }
}
