//! SambaNova API wire types.
//!
//! The API is OpenAI-compatible: completion bodies carry a flat `prompt`
//! string, chat bodies carry role-structured `messages`. Caller-supplied
//! generation options are flattened into the body as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the `/completions` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// The remote model identifier.
    pub model: String,
    /// The flattened prompt text, history included.
    pub prompt: String,
    /// Whether to stream the response as SSE.
    pub stream: bool,
    /// Pass-through generation options (temperature, max tokens, etc.).
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// Request body for the `/chat/completions` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The remote model identifier.
    pub model: String,
    /// The conversation as role-structured messages, current prompt last.
    pub messages: Vec<ChatMessage>,
    /// Whether to stream the response as SSE.
    pub stream: bool,
    /// Pass-through generation options (temperature, max tokens, etc.).
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message submitted by the caller.
    User,
    /// A prior model response.
    Assistant,
}

/// A message in a chat request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Full (non-streaming) `/completions` response body.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    /// Completion candidates; only the first is consumed.
    pub choices: Vec<CompletionChoice>,
}

/// One completion candidate, also the per-line shape of streamed chunks.
#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    /// Generated text, absent in some keep-alive chunks.
    pub text: Option<String>,
}

/// Full (non-streaming) `/chat/completions` response body.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Chat candidates; only the first is consumed.
    pub choices: Vec<ChatChoice>,
}

/// One chat candidate in a full response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The assistant message.
    pub message: Option<ChatMessage>,
}

/// One streamed chunk of a chat response.
#[derive(Debug, Deserialize)]
pub struct ChatChunk {
    /// Incremental chat candidates; only the first is consumed.
    pub choices: Vec<ChatChunkChoice>,
}

/// One chat candidate in a streamed chunk.
#[derive(Debug, Deserialize)]
pub struct ChatChunkChoice {
    /// The incremental content delta.
    pub delta: Option<ChatDelta>,
}

/// Incremental content of a streamed chat chunk.
#[derive(Debug, Deserialize)]
pub struct ChatDelta {
    /// The next fragment of assistant text, if any.
    pub content: Option<String>,
}

/// Streamed `/completions` chunks reuse the full-response choice shape.
#[derive(Debug, Deserialize)]
pub struct CompletionChunk {
    /// Incremental completion candidates; only the first is consumed.
    pub choices: Vec<CompletionChoice>,
}
