//! Gemini REST client.
//!
//! Talks to the `generateContent` endpoint directly over HTTPS. One call
//! per operation — no retry, no streaming. The request timeout is set on
//! the underlying HTTP client at construction, so a hung upstream call
//! surfaces as an error instead of blocking a handler indefinitely.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeminiError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client with an explicit per-request timeout.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeminiError::Request(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Override the endpoint base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send a conversation to the model and return the reply text.
    pub async fn generate(
        &self,
        system_instruction: Option<&str>,
        contents: Vec<Content>,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents,
            system_instruction: system_instruction.map(|text| Content {
                role: "system".to_string(),
                parts: vec![Part { text: text.to_string() }],
            }),
            generation_config: GenerationConfig::default(),
        };

        let url = format!(
            "{base}/{model}:generateContent?key={key}",
            base = self.base_url,
            model = self.model,
            key = self.api_key,
        );

        debug!(model = %self.model, turns = request.contents.len(), "sending generateContent request");

        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_api_error(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))?;

        extract_text(parsed)
    }

    /// Convenience wrapper for single-prompt operations: one user turn, no
    /// system instruction.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate(
            None,
            vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt.to_string() }],
            }],
        )
        .await
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

/// A single conversation turn on the wire. Gemini accepts roles `user` and
/// `model`; the system instruction travels in its own field.
#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorWrapper {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(GeminiError::EmptyResponse)
}

fn map_api_error(status: StatusCode, body: &str) -> GeminiError {
    let message = serde_json::from_str::<ApiErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    GeminiError::Api {
        status: status.as_u16(),
        message,
    }
}
