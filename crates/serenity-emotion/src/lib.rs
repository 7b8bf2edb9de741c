//! serenity-emotion
//!
//! The Emotion Scorer: pluggable classifier capabilities for text, voice,
//! and facial signals, and the weighted combination that folds whatever
//! sources are present into one normalized emotional context.

pub mod classifiers;
pub mod error;
pub mod scorer;

pub use classifiers::{
    FacialEmotionClassifier, GeminiSentimentClassifier, NeutralFaceClassifier,
    NeutralVoiceClassifier, TextSentimentClassifier, VoiceToneClassifier,
};
pub use error::ClassificationError;
pub use scorer::EmotionScorer;
