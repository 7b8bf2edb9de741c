use std::sync::Arc;

use async_trait::async_trait;

use serenity_core::emotion::Emotion;
use serenity_emotion::{
    ClassificationError, EmotionScorer, FacialEmotionClassifier, TextSentimentClassifier,
    VoiceToneClassifier,
};

struct FixedText(&'static str);

#[async_trait]
impl TextSentimentClassifier for FixedText {
    async fn classify(&self, _text: &str) -> Result<String, ClassificationError> {
        Ok(self.0.to_string())
    }
}

struct FixedVoice(&'static str);

#[async_trait]
impl VoiceToneClassifier for FixedVoice {
    async fn classify(&self, _audio: &[u8]) -> Result<String, ClassificationError> {
        Ok(self.0.to_string())
    }
}

struct FixedFace(&'static str);

#[async_trait]
impl FacialEmotionClassifier for FixedFace {
    async fn classify(&self, _image: &[u8]) -> Result<String, ClassificationError> {
        Ok(self.0.to_string())
    }
}

struct FailingText;

#[async_trait]
impl TextSentimentClassifier for FailingText {
    async fn classify(&self, _text: &str) -> Result<String, ClassificationError> {
        Err(ClassificationError::Backend("upstream unavailable".to_string()))
    }
}

fn scorer(text: &'static str, voice: &'static str, face: &'static str) -> EmotionScorer {
    EmotionScorer::new(
        Arc::new(FixedText(text)),
        Arc::new(FixedVoice(voice)),
        Arc::new(FixedFace(face)),
    )
}

#[tokio::test]
async fn text_only_happy_scores_one() {
    let scorer = scorer("Happy", "Neutral", "Neutral");
    let context = scorer.combine("I feel great", None, None, None).await;

    assert_eq!(context.text_sentiment.as_deref(), Some("Happy"));
    assert_eq!(context.voice_tone, None);
    assert_eq!(context.facial_emotion, None);

    let score = context.combined_emotion_score.unwrap();
    assert!((score.happy - 1.0).abs() < 1e-9);
    for emotion in Emotion::ALL {
        if emotion != Emotion::Happy {
            assert_eq!(score.get(emotion), 0.0);
        }
    }
}

#[tokio::test]
async fn three_sources_weight_by_channel() {
    let scorer = scorer("Sad", "Angry", "Happy");
    let context = scorer
        .combine("rough day", Some(b"audio"), Some(b"image"), None)
        .await;

    let score = context.combined_emotion_score.unwrap();
    assert!((score.sad - 1.0 / 4.5).abs() < 1e-9);
    assert!((score.angry - 1.5 / 4.5).abs() < 1e-9);
    assert!((score.happy - 2.0 / 4.5).abs() < 1e-9);
    assert!((score.total() - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn all_source_combinations_sum_to_one() {
    let scorer = scorer("Stressed", "Anxious", "Depressed");

    for (audio, image) in [
        (None, None),
        (Some(b"a".as_slice()), None),
        (None, Some(b"i".as_slice())),
        (Some(b"a".as_slice()), Some(b"i".as_slice())),
    ] {
        let context = scorer.combine("text", audio, image, None).await;
        let score = context.combined_emotion_score.unwrap();
        assert!((score.total() - 1.0).abs() < 1e-9);
        for emotion in Emotion::ALL {
            let weight = score.get(emotion);
            assert!((0.0..=1.0).contains(&weight));
        }
    }
}

#[tokio::test]
async fn agreeing_sources_concentrate_the_distribution() {
    let scorer = scorer("Sad", "Sad", "Sad");
    let context = scorer
        .combine("text", Some(b"audio"), Some(b"image"), None)
        .await;

    let score = context.combined_emotion_score.unwrap();
    assert!((score.sad - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn client_hint_overrides_face_classifier() {
    let scorer = scorer("Neutral", "Neutral", "Happy");
    let context = scorer
        .combine("text", None, Some(b"image"), Some("Angry"))
        .await;

    assert_eq!(context.facial_emotion.as_deref(), Some("Angry"));
    let score = context.combined_emotion_score.unwrap();
    assert!((score.angry - 2.0 / 3.0).abs() < 1e-9);
    assert!((score.neutral - 1.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn classification_failure_degrades_instead_of_propagating() {
    let scorer = EmotionScorer::new(
        Arc::new(FailingText),
        Arc::new(FixedVoice("Happy")),
        Arc::new(FixedFace("Happy")),
    );

    let context = scorer
        .combine("text", Some(b"audio"), Some(b"image"), None)
        .await;

    assert_eq!(context.text_sentiment.as_deref(), Some("Neutral"));
    assert_eq!(context.voice_tone, None);
    assert_eq!(context.facial_emotion, None);
    assert!(context.combined_emotion_score.is_none());
}

#[tokio::test]
async fn label_outside_taxonomy_scores_as_neutral() {
    let scorer = scorer("Bewildered", "Neutral", "Neutral");
    let context = scorer.combine("text", None, None, None).await;

    // Raw label is preserved even though it scores as neutral.
    assert_eq!(context.text_sentiment.as_deref(), Some("Bewildered"));
    let score = context.combined_emotion_score.unwrap();
    assert!((score.neutral - 1.0).abs() < 1e-9);
    assert!((score.total() - 1.0).abs() < 1e-9);
}
