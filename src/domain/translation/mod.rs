pub mod dto;
pub mod error;
pub mod history;
pub mod language;
pub mod model;
pub mod workflow;

pub use error::{ApiError, WorkflowError};
pub use history::{EntryId, HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use language::{LanguageCode, Tone};
pub use model::{
    SpeechAudio, TranslationInput, TranslationRecord, Voice, VoiceCatalog, VoiceSettings,
};
pub use workflow::{CurrentTranslation, TranslationWorkflow, WorkflowPhase, WorkflowState};
