//! Classifier capabilities.
//!
//! Each signal source is a trait so a real model can replace a stub without
//! touching the scorer. Voice and face currently ship with always-neutral
//! implementations; text sentiment goes through the Gemini gateway.

use std::sync::Arc;

use async_trait::async_trait;

use serenity_gemini::analysis;
use serenity_gemini::client::GeminiClient;

use crate::error::ClassificationError;

/// Classifies free text into one of the seven taxonomy labels.
#[async_trait]
pub trait TextSentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<String, ClassificationError>;
}

/// Classifies raw audio into one of the seven taxonomy labels.
///
/// No accuracy is guaranteed by the contract — only that a label comes
/// back synchronously from the caller's point of view.
#[async_trait]
pub trait VoiceToneClassifier: Send + Sync {
    async fn classify(&self, audio: &[u8]) -> Result<String, ClassificationError>;
}

/// Classifies a still image into one of the seven taxonomy labels.
#[async_trait]
pub trait FacialEmotionClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<String, ClassificationError>;
}

/// Text sentiment via the Gemini fixed-choice mood prompt.
pub struct GeminiSentimentClassifier {
    client: Arc<GeminiClient>,
}

impl GeminiSentimentClassifier {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextSentimentClassifier for GeminiSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<String, ClassificationError> {
        Ok(analysis::analyze_mood(self.client.as_ref(), text).await?)
    }
}

/// Stub voice classifier: always `"Neutral"`.
pub struct NeutralVoiceClassifier;

#[async_trait]
impl VoiceToneClassifier for NeutralVoiceClassifier {
    async fn classify(&self, _audio: &[u8]) -> Result<String, ClassificationError> {
        Ok("Neutral".to_string())
    }
}

/// Stub face classifier: always `"Neutral"`.
pub struct NeutralFaceClassifier;

#[async_trait]
impl FacialEmotionClassifier for NeutralFaceClassifier {
    async fn classify(&self, _image: &[u8]) -> Result<String, ClassificationError> {
        Ok("Neutral".to_string())
    }
}
