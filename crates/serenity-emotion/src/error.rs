use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("classifier backend failed: {0}")]
    Backend(String),
}

impl From<serenity_gemini::error::GeminiError> for ClassificationError {
    fn from(e: serenity_gemini::error::GeminiError) -> Self {
        ClassificationError::Backend(e.to_string())
    }
}
