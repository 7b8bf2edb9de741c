//! serenity-gemini
//!
//! The LLM gateway: a thin client for the Gemini `generateContent` REST
//! API, the conversation assembler that turns stored chat history into
//! ordered prompt turns, and the single-shot analysis prompts (mood,
//! cognitive distortion, thought reframing).

pub mod analysis;
pub mod client;
pub mod error;
pub mod prompt;
