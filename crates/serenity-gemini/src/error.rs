use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// The user-facing generation failure. Upstream detail is logged at the
    /// call site, never surfaced to the client.
    #[error("Failed to get response from AI")]
    Generation,

    #[error("request to Gemini API failed: {0}")]
    Request(String),

    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("no text in response candidates")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
