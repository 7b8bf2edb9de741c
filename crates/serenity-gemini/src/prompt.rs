//! Conversation assembly.
//!
//! Turns a session's stored message list into the ordered prompt the model
//! expects: one fixed persona instruction first, then one turn per message
//! in original order. A user message that carries an emotional context gets
//! a side-channel annotation appended after its literal text — the
//! annotation augments the message, it never replaces it.

use tracing::warn;

use serenity_core::models::chat::{EmotionalContext, Message, Role};

use crate::client::{Content, GeminiClient, Part};
use crate::error::GeminiError;

/// The fixed SerenityBot persona, prepended to every conversation.
pub const THERAPIST_PERSONA: &str = "You are a compassionate mental health therapist named SerenityBot.
Use empathy first, then guide the user using evidence-based techniques like CBT (Cognitive Behavioral Therapy) and DBT (Dialectical Behavior Therapy).
Avoid generic replies and platitudes. Be supportive, calm, and helpful.
When appropriate, suggest specific coping strategies, breathing exercises, or mindfulness techniques.
Consider the user's emotional state in your responses.
Never claim to be a replacement for professional help - encourage seeking professional help when appropriate.
Keep responses relatively concise (2-3 paragraphs maximum) unless the situation requires more detail.";

/// Role of an assembled prompt turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    System,
    User,
    Model,
}

/// One ordered turn of the assembled prompt.
#[derive(Debug, Clone)]
pub struct PromptTurn {
    pub role: PromptRole,
    pub text: String,
}

/// Assemble the ordered prompt for a message history.
///
/// The persona turn is always first, regardless of history length
/// (including zero). Message order is preserved exactly.
pub fn build_prompt(messages: &[Message]) -> Vec<PromptTurn> {
    let mut turns = Vec::with_capacity(messages.len() + 1);
    turns.push(PromptTurn {
        role: PromptRole::System,
        text: THERAPIST_PERSONA.to_string(),
    });

    for message in messages {
        let turn = match message.role {
            Role::User => PromptTurn {
                role: PromptRole::User,
                text: match &message.emotional_context {
                    Some(context) => annotate(&message.content, context),
                    None => message.content.clone(),
                },
            },
            Role::Assistant => PromptTurn {
                role: PromptRole::Model,
                text: message.content.clone(),
            },
        };
        turns.push(turn);
    }

    turns
}

/// Append the emotional-context annotation block to a user turn's text.
fn annotate(content: &str, context: &EmotionalContext) -> String {
    format!(
        "{content}\n\n[EMOTIONAL CONTEXT:\n  Facial emotion: {facial}\n  Voice tone: {voice}\n  Text sentiment: {text}\n]",
        facial = context.facial_emotion.as_deref().unwrap_or("Not detected"),
        voice = context.voice_tone.as_deref().unwrap_or("Not detected"),
        text = context.text_sentiment.as_deref().unwrap_or("Not analyzed"),
    )
}

/// Send assembled turns to the model and return the assistant reply.
///
/// A single call with no retry and no partial output: any upstream failure
/// is logged and surfaced as [`GeminiError::Generation`], and the caller
/// must not have persisted anything for the turn yet.
pub async fn get_reply(client: &GeminiClient, turns: &[PromptTurn]) -> Result<String, GeminiError> {
    let mut system_instruction: Option<&str> = None;
    let mut contents = Vec::new();

    for turn in turns {
        match turn.role {
            PromptRole::System => system_instruction = Some(&turn.text),
            PromptRole::User => contents.push(Content {
                role: "user".to_string(),
                parts: vec![Part { text: turn.text.clone() }],
            }),
            PromptRole::Model => contents.push(Content {
                role: "model".to_string(),
                parts: vec![Part { text: turn.text.clone() }],
            }),
        }
    }

    client
        .generate(system_instruction, contents)
        .await
        .map_err(|e| {
            warn!(error = %e, "chat generation failed");
            GeminiError::Generation
        })
}
