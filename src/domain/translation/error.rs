use crate::error::AppError;

/// Failure talking to the translation backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach backend: {0}")]
    Transport(String),
    #[error("backend responded with {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("unexpected backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("text to translate cannot be empty")]
    EmptyInput,
    #[error("Translation error: {0}")]
    Translation(ApiError),
    #[error("TTS error: {0}")]
    Synthesis(ApiError),
    #[error("no translation available to synthesize")]
    NothingToSynthesize,
    #[error("unknown voice: {0}")]
    UnknownVoice(String),
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::EmptyInput => AppError::BadRequest(err.to_string()),
            WorkflowError::UnknownVoice(_) => AppError::BadRequest(err.to_string()),
            WorkflowError::NothingToSynthesize => AppError::Conflict(err.to_string()),
            WorkflowError::Translation(_) | WorkflowError::Synthesis(_) => {
                AppError::ExternalService(err.to_string())
            }
        }
    }
}
