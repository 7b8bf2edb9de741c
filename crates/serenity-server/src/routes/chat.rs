use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;
use uuid::Uuid;

use serenity_core::models::chat::{ChatSession, Message};
use serenity_gemini::analysis;
use serenity_gemini::prompt::{build_prompt, get_reply};
use serenity_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Admission-control threshold, kept safely below the transport-level
/// 50 MiB body limit.
const MAX_PAYLOAD_BYTES: usize = 45 * 1024 * 1024;

#[derive(Serialize)]
pub struct Envelope<T> {
    success: bool,
    data: T,
}

fn chat_not_found(e: StorageError) -> ApiError {
    match e {
        StorageError::NotFound { .. } => ApiError::NotFound("Chat not found".to_string()),
        other => ApiError::from(other),
    }
}

/// Decode a base64 media payload, tolerating a `data:...;base64,` prefix.
fn decode_media(field: &str, value: &str) -> Result<Vec<u8>, ApiError> {
    let encoded = match value.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => value,
    };
    BASE64
        .decode(encoded.trim())
        .map_err(|_| ApiError::BadRequest(format!("{field} is not valid base64")))
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    message: Option<String>,
    chat_id: Option<Uuid>,
    audio_data: Option<String>,
    image_data: Option<String>,
    detected_emotion: Option<String>,
}

pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Envelope<ChatSession>>), ApiError> {
    // Admission control before any session lookup or model call.
    let payload_size = serde_json::to_vec(&req)
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .len();
    debug!(payload_mib = payload_size / (1024 * 1024), "received chat payload");
    if payload_size > MAX_PAYLOAD_BYTES {
        return Err(ApiError::PayloadTooLarge(
            "Payload too large. Please reduce the size of your message or media.".to_string(),
        ));
    }

    let message = req
        .message
        .ok_or_else(|| ApiError::BadRequest("Message is required".to_string()))?;

    let (session, created) = match req.chat_id {
        Some(id) => {
            let session = state
                .sessions
                .load(id, user.id)
                .await
                .map_err(chat_not_found)?;
            (session, false)
        }
        None => (state.sessions.create(user.id).await?, true),
    };

    // Emotional context only when there is text to anchor it.
    let emotional_context = if message.is_empty() {
        None
    } else {
        let audio = req
            .audio_data
            .as_deref()
            .map(|a| decode_media("audioData", a))
            .transpose()?;
        let image = req
            .image_data
            .as_deref()
            .map(|i| decode_media("imageData", i))
            .transpose()?;

        Some(
            state
                .scorer
                .combine(
                    &message,
                    audio.as_deref(),
                    image.as_deref(),
                    req.detected_emotion.as_deref(),
                )
                .await,
        )
    };

    let user_message = Message::user(message, emotional_context);

    // Assemble the prompt over the stored history plus the new user turn;
    // nothing is persisted until a reply is in hand, so a generation
    // failure leaves no dangling user message.
    let mut history = session.messages.clone();
    history.push(user_message.clone());
    let turns = build_prompt(&history);

    let reply = get_reply(state.gemini.as_ref(), &turns).await?;

    let updated = state
        .sessions
        .append_turn(
            session.id,
            user.id,
            session.messages.len(),
            user_message,
            Message::assistant(reply),
        )
        .await?;

    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((
        status,
        Json(Envelope {
            success: true,
            data: updated,
        }),
    ))
}

pub async fn list_chats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<ChatSession>>>, ApiError> {
    let sessions = state.sessions.list(user.id).await?;
    Ok(Json(Envelope {
        success: true,
        data: sessions,
    }))
}

pub async fn get_chat(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<ChatSession>>, ApiError> {
    let session = state
        .sessions
        .load(id, user.id)
        .await
        .map_err(chat_not_found)?;
    Ok(Json(Envelope {
        success: true,
        data: session,
    }))
}

pub async fn delete_chat(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state
        .sessions
        .delete(id, user.id)
        .await
        .map_err(chat_not_found)?;
    Ok(Json(json!({
        "success": true,
        "message": "Chat deleted successfully"
    })))
}

// ── Emotion analysis ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AnalyzeMoodRequest {
    text: Option<String>,
}

pub async fn analyze_mood(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeMoodRequest>,
) -> Result<Json<Value>, ApiError> {
    let text = req
        .text
        .ok_or_else(|| ApiError::BadRequest("Text is required".to_string()))?;
    let mood = state.scorer.classify_text(&text).await?;
    Ok(Json(json!({ "mood": mood })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeVoiceRequest {
    audio_data: Option<String>,
}

pub async fn analyze_voice(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeVoiceRequest>,
) -> Result<Json<Value>, ApiError> {
    let audio = req
        .audio_data
        .ok_or_else(|| ApiError::BadRequest("Audio data is required".to_string()))?;
    let audio = decode_media("audioData", &audio)?;
    let tone = state.scorer.classify_voice(&audio).await?;
    Ok(Json(json!({ "tone": tone })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFaceRequest {
    image_data: Option<String>,
    detected_emotion: Option<String>,
}

pub async fn analyze_face(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeFaceRequest>,
) -> Result<Json<Value>, ApiError> {
    let image = req
        .image_data
        .ok_or_else(|| ApiError::BadRequest("Image data is required".to_string()))?;
    let image = decode_media("imageData", &image)?;
    let emotion = state
        .scorer
        .classify_face(&image, req.detected_emotion.as_deref())
        .await?;
    Ok(Json(json!({ "emotion": emotion })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEmotionRequest {
    text: Option<String>,
    audio_data: Option<String>,
    image_data: Option<String>,
    detected_emotion: Option<String>,
}

pub async fn analyze_emotion(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeEmotionRequest>,
) -> Result<Json<serenity_core::models::chat::EmotionalContext>, ApiError> {
    let text = req
        .text
        .ok_or_else(|| ApiError::BadRequest("Text is required".to_string()))?;

    let audio = req
        .audio_data
        .as_deref()
        .map(|a| decode_media("audioData", a))
        .transpose()?;
    let image = req
        .image_data
        .as_deref()
        .map(|i| decode_media("imageData", i))
        .transpose()?;

    let context = state
        .scorer
        .combine(
            &text,
            audio.as_deref(),
            image.as_deref(),
            req.detected_emotion.as_deref(),
        )
        .await;

    Ok(Json(context))
}

// ── Thought reframing ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeThoughtRequest {
    negative_thought: Option<String>,
}

pub async fn analyze_thought(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeThoughtRequest>,
) -> Result<Json<Value>, ApiError> {
    let negative_thought = req
        .negative_thought
        .ok_or_else(|| ApiError::BadRequest("Negative thought is required".to_string()))?;

    let distortion =
        analysis::analyze_cognitive_distortion(state.gemini.as_ref(), &negative_thought).await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "negativeThought": negative_thought,
            "distortion": distortion
        }
    })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReframeThoughtRequest {
    negative_thought: Option<String>,
    distortion: Option<String>,
}

pub async fn reframe_thought(
    State(state): State<AppState>,
    Json(req): Json<ReframeThoughtRequest>,
) -> Result<Json<Value>, ApiError> {
    let negative_thought = req
        .negative_thought
        .ok_or_else(|| ApiError::BadRequest("Negative thought is required".to_string()))?;

    let distortion = match req.distortion {
        Some(distortion) if !distortion.trim().is_empty() => distortion,
        _ => analysis::analyze_cognitive_distortion(state.gemini.as_ref(), &negative_thought).await?,
    };

    let reframed =
        analysis::generate_reframed_thought(state.gemini.as_ref(), &negative_thought, &distortion)
            .await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "negativeThought": negative_thought,
            "distortion": distortion,
            "reframedThought": reframed
        }
    })))
}
