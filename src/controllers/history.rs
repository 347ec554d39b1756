use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    domain::translation::{EntryId, HistoryEntry, TranslationWorkflow},
    error::{AppError, AppResult},
};

/// JSON view of the session history, newest entry first
pub struct HistoryController {
    session: Arc<Mutex<TranslationWorkflow>>,
}

impl HistoryController {
    pub fn new(session: Arc<Mutex<TranslationWorkflow>>) -> Self {
        Self { session }
    }

    /// GET /api/history
    pub async fn list_history(
        State(controller): State<Arc<HistoryController>>,
    ) -> AppResult<Json<Vec<HistoryEntry>>> {
        let workflow = controller.session.lock().await;
        Ok(Json(workflow.history().all().cloned().collect()))
    }

    /// DELETE /api/history/:id
    pub async fn delete_entry(
        State(controller): State<Arc<HistoryController>>,
        Path(entry_id): Path<u64>,
    ) -> AppResult<StatusCode> {
        let mut workflow = controller.session.lock().await;

        if workflow.delete_history_entry(EntryId(entry_id)) {
            Ok(StatusCode::NO_CONTENT)
        } else {
            Err(AppError::NotFound(format!(
                "History entry {} not found",
                entry_id
            )))
        }
    }
}
