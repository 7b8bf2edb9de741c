use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::emotion::EmotionScore;

/// Title given to a session before its first exchange.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Maximum number of characters of the first user message kept as the title.
pub const TITLE_MAX_CHARS: usize = 30;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Per-message record of detected sentiment, tone, and expression.
///
/// Raw labels are stored as the classifiers returned them; the combined
/// score is the normalized weight map over the seven taxonomy labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_sentiment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facial_emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_emotion_score: Option<EmotionScore>,
}

/// A single message in a persisted chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotional_context: Option<EmotionalContext>,
}

impl Message {
    pub fn user(content: impl Into<String>, emotional_context: Option<EmotionalContext>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
            emotional_context,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
            emotional_context: None,
        }
    }
}

/// A persisted conversation thread owned by one user.
///
/// Messages are append-only and alternate user/assistant; each exchange is
/// appended as a pair so the stored history never ends on a dangling user
/// message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ChatSession {
    pub fn new(owner_id: Uuid) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a user/assistant exchange and refresh `updated_at`.
    ///
    /// When this append brings the message count to exactly two, the title
    /// is set from the user message. Messages are never removed, so the
    /// title rule fires at most once per session.
    pub fn append_turn(&mut self, user: Message, assistant: Message) {
        let user_content = user.content.clone();
        self.messages.push(user);
        self.messages.push(assistant);
        self.updated_at = jiff::Timestamp::now();

        if self.messages.len() == 2 {
            self.title = derive_title(&user_content);
        }
    }
}

/// Build a session title from the first user message: the first
/// [`TITLE_MAX_CHARS`] characters, with `...` appended when truncated.
pub fn derive_title(content: &str) -> String {
    let mut title: String = content.chars().take(TITLE_MAX_CHARS).collect();
    if content.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_kept_verbatim() {
        assert_eq!(derive_title("I feel great"), "I feel great");
    }

    #[test]
    fn exactly_thirty_chars_is_not_truncated() {
        let content = "a".repeat(30);
        assert_eq!(derive_title(&content), content);
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let content = "I have been feeling anxious about work lately";
        let title = derive_title(content);
        assert_eq!(title, "I have been feeling anxious ab...");
        assert_eq!(title.chars().count(), 33);
    }

    #[test]
    fn first_turn_sets_title_later_turns_do_not() {
        let mut session = ChatSession::new(Uuid::new_v4());
        assert_eq!(session.title, DEFAULT_TITLE);

        session.append_turn(
            Message::user("hello there", None),
            Message::assistant("hi, how are you feeling today?"),
        );
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.title, "hello there");

        session.append_turn(
            Message::user("a different message entirely", None),
            Message::assistant("tell me more"),
        );
        assert_eq!(session.messages.len(), 4);
        assert_eq!(session.title, "hello there");
    }

    #[test]
    fn append_refreshes_updated_at() {
        let mut session = ChatSession::new(Uuid::new_v4());
        let before = session.updated_at;
        session.append_turn(Message::user("hi", None), Message::assistant("hello"));
        assert!(session.updated_at >= before);
    }

    #[test]
    fn session_serializes_with_camel_case_keys() {
        let session = ChatSession::new(Uuid::new_v4());
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn absent_emotional_context_is_omitted() {
        let message = Message::assistant("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("emotionalContext").is_none());
    }
}
