//! Weighted combination of classification sources.

use std::sync::Arc;

use tracing::{debug, warn};

use serenity_core::emotion::{Emotion, EmotionScore};
use serenity_core::models::chat::EmotionalContext;

use crate::classifiers::{FacialEmotionClassifier, TextSentimentClassifier, VoiceToneClassifier};
use crate::error::ClassificationError;

/// Source weights. Face is considered the strongest signal, voice next,
/// text the weakest.
const TEXT_WEIGHT: f64 = 1.0;
const VOICE_WEIGHT: f64 = 1.5;
const FACE_WEIGHT: f64 = 2.0;

/// Combines up to three independent emotion signals into one normalized
/// [`EmotionalContext`].
///
/// Text is the mandatory source — callers with no text skip the scorer
/// entirely. Voice and face are scored only when their payloads are
/// present.
pub struct EmotionScorer {
    text: Arc<dyn TextSentimentClassifier>,
    voice: Arc<dyn VoiceToneClassifier>,
    face: Arc<dyn FacialEmotionClassifier>,
}

impl EmotionScorer {
    pub fn new(
        text: Arc<dyn TextSentimentClassifier>,
        voice: Arc<dyn VoiceToneClassifier>,
        face: Arc<dyn FacialEmotionClassifier>,
    ) -> Self {
        Self { text, voice, face }
    }

    /// Classify text sentiment. Failures are fatal here — the direct
    /// analysis endpoints surface them; only [`combine`](Self::combine)
    /// absorbs them.
    pub async fn classify_text(&self, text: &str) -> Result<String, ClassificationError> {
        self.text.classify(text).await
    }

    pub async fn classify_voice(&self, audio: &[u8]) -> Result<String, ClassificationError> {
        self.voice.classify(audio).await
    }

    /// Classify facial emotion. A client-side detector's hint, when
    /// present, is returned verbatim without invoking the classifier.
    pub async fn classify_face(
        &self,
        image: &[u8],
        client_hint: Option<&str>,
    ) -> Result<String, ClassificationError> {
        if let Some(hint) = client_hint {
            debug!(hint, "using client-detected facial emotion");
            return Ok(hint.to_string());
        }
        self.face.classify(image).await
    }

    /// Fold the present sources into one emotional context.
    ///
    /// Never fails: any classifier error degrades to a minimal context
    /// (`textSentiment: "Neutral"`, everything else absent) so the
    /// conversation path is never blocked by classification.
    pub async fn combine(
        &self,
        text: &str,
        audio: Option<&[u8]>,
        image: Option<&[u8]>,
        client_hint: Option<&str>,
    ) -> EmotionalContext {
        match self.try_combine(text, audio, image, client_hint).await {
            Ok(context) => context,
            Err(e) => {
                warn!(error = %e, "emotion combination degraded to neutral fallback");
                EmotionalContext {
                    text_sentiment: Some("Neutral".to_string()),
                    voice_tone: None,
                    facial_emotion: None,
                    combined_emotion_score: None,
                }
            }
        }
    }

    async fn try_combine(
        &self,
        text: &str,
        audio: Option<&[u8]>,
        image: Option<&[u8]>,
        client_hint: Option<&str>,
    ) -> Result<EmotionalContext, ClassificationError> {
        let text_sentiment = self.classify_text(text).await?;

        let voice_tone = match audio {
            Some(audio) => Some(self.classify_voice(audio).await?),
            None => None,
        };

        let facial_emotion = match image {
            Some(image) => Some(self.classify_face(image, client_hint).await?),
            None => None,
        };

        let mut score = EmotionScore::default();
        let mut total_weight = 0.0;

        score.add(parse_label(&text_sentiment), TEXT_WEIGHT);
        total_weight += TEXT_WEIGHT;

        if let Some(tone) = &voice_tone {
            score.add(parse_label(tone), VOICE_WEIGHT);
            total_weight += VOICE_WEIGHT;
        }

        if let Some(emotion) = &facial_emotion {
            score.add(parse_label(emotion), FACE_WEIGHT);
            total_weight += FACE_WEIGHT;
        }

        score.normalize(total_weight);

        Ok(EmotionalContext {
            text_sentiment: Some(text_sentiment),
            voice_tone,
            facial_emotion,
            combined_emotion_score: Some(score),
        })
    }
}

/// Map a classifier's raw label onto the taxonomy. Labels outside the
/// taxonomy score as neutral so the distribution still sums to one.
fn parse_label(label: &str) -> Emotion {
    label.parse::<Emotion>().unwrap_or_else(|_| {
        debug!(label, "label outside taxonomy, scoring as neutral");
        Emotion::Neutral
    })
}
