//! The fixed 7-label emotion taxonomy and its normalized score map.
//!
//! Every classifier in the system — text sentiment, voice tone, facial
//! expression — reports one of these labels. Labels are matched
//! case-insensitively on input and always rendered lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the seven recognized emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Anxious,
    Neutral,
    Stressed,
    Depressed,
}

impl Emotion {
    /// All taxonomy labels, in canonical order.
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Neutral,
        Emotion::Stressed,
        Emotion::Depressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Neutral => "neutral",
            Emotion::Stressed => "stressed",
            Emotion::Depressed => "depressed",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "angry" => Ok(Emotion::Angry),
            "anxious" => Ok(Emotion::Anxious),
            "neutral" => Ok(Emotion::Neutral),
            "stressed" => Ok(Emotion::Stressed),
            "depressed" => Ok(Emotion::Depressed),
            other => Err(CoreError::UnknownEmotion(other.to_string())),
        }
    }
}

/// Normalized weight per taxonomy label.
///
/// When at least one classification source contributed, the weights sum to
/// 1.0; an all-zero map only occurs when nothing was scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub anxious: f64,
    pub neutral: f64,
    pub stressed: f64,
    pub depressed: f64,
}

impl EmotionScore {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Anxious => self.anxious,
            Emotion::Neutral => self.neutral,
            Emotion::Stressed => self.stressed,
            Emotion::Depressed => self.depressed,
        }
    }

    pub fn add(&mut self, emotion: Emotion, weight: f64) {
        match emotion {
            Emotion::Happy => self.happy += weight,
            Emotion::Sad => self.sad += weight,
            Emotion::Angry => self.angry += weight,
            Emotion::Anxious => self.anxious += weight,
            Emotion::Neutral => self.neutral += weight,
            Emotion::Stressed => self.stressed += weight,
            Emotion::Depressed => self.depressed += weight,
        }
    }

    /// Divide every label weight by `total`. No-op when `total` is zero.
    pub fn normalize(&mut self, total: f64) {
        if total <= 0.0 {
            return;
        }
        self.happy /= total;
        self.sad /= total;
        self.angry /= total;
        self.anxious /= total;
        self.neutral /= total;
        self.stressed /= total;
        self.depressed /= total;
    }

    pub fn total(&self) -> f64 {
        Emotion::ALL.iter().map(|e| self.get(*e)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("Happy".parse::<Emotion>().unwrap(), Emotion::Happy);
        assert_eq!("  STRESSED ".parse::<Emotion>().unwrap(), Emotion::Stressed);
        assert_eq!("depressed".parse::<Emotion>().unwrap(), Emotion::Depressed);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("confused".parse::<Emotion>().is_err());
        assert!("".parse::<Emotion>().is_err());
    }

    #[test]
    fn score_accumulates_and_normalizes() {
        let mut score = EmotionScore::default();
        score.add(Emotion::Sad, 1.0);
        score.add(Emotion::Angry, 1.5);
        score.add(Emotion::Happy, 2.0);
        score.normalize(4.5);

        assert!((score.sad - 1.0 / 4.5).abs() < 1e-9);
        assert!((score.angry - 1.5 / 4.5).abs() < 1e-9);
        assert!((score.happy - 2.0 / 4.5).abs() < 1e-9);
        assert!((score.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_by_zero_is_a_no_op() {
        let mut score = EmotionScore::default();
        score.normalize(0.0);
        assert_eq!(score.total(), 0.0);
    }

    #[test]
    fn score_serializes_with_lowercase_labels() {
        let mut score = EmotionScore::default();
        score.add(Emotion::Happy, 1.0);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["happy"], 1.0);
        assert_eq!(json["depressed"], 0.0);
    }
}
